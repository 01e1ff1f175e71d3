use serde::{Deserialize, Serialize};

/// Access counter for one city or state, as served by the statistics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accesses: u64,
}

/// Grouping shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "cidades")]
    Cities,
    #[serde(rename = "estados")]
    States,
}

impl ViewMode {
    /// Key of this mode inside the report envelope
    pub fn key(&self) -> &'static str {
        match self {
            ViewMode::Cities => "cidades",
            ViewMode::States => "estados",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ViewMode::Cities => "Cidade",
            ViewMode::States => "Estado",
        }
    }

    pub fn all() -> [ViewMode; 2] {
        [ViewMode::Cities, ViewMode::States]
    }
}

/// `GET /relatorio/mais-acessados`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionsReport {
    #[serde(default)]
    pub cidades: Vec<Region>,
    #[serde(default)]
    pub estados: Vec<Region>,
}

impl RegionsReport {
    /// Takes the list for `mode`, dropping the other one
    pub fn into_regions(self, mode: ViewMode) -> Vec<Region> {
        match mode {
            ViewMode::Cities => self.cidades,
            ViewMode::States => self.estados,
        }
    }
}
