// ============================================================================
// REGIONS VIEWMODEL - live access dashboard state
// ============================================================================
// Pure state machine driven by `use_regions_poller`. No timers, no HTTP.
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use crate::models::{Region, RegionsReport, ViewMode};

pub const RANKED_LIST_SIZE: usize = 10;

/// Summary used by the map markers
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    /// Highest access count, never below 1
    pub max_accesses: u64,
    pub most_accessed: Option<Region>,
}

impl Default for DerivedStats {
    fn default() -> Self {
        Self { max_accesses: 1, most_accessed: None }
    }
}

impl DerivedStats {
    pub fn compute(regions: &[Region]) -> Self {
        let max_accesses = regions.iter().map(|r| r.accesses).max().unwrap_or(0).max(1);

        // Strictly greater: the first of equal maxima stays
        let most_accessed = regions
            .iter()
            .fold(None::<&Region>, |best, region| match best {
                Some(current) if region.accesses <= current.accesses => Some(current),
                _ => Some(region),
            })
            .cloned();

        Self { max_accesses, most_accessed }
    }

    pub fn is_most_accessed(&self, region: &Region) -> bool {
        self.most_accessed
            .as_ref()
            .map(|best| best.accesses == region.accesses)
            .unwrap_or(false)
    }
}

/// Tag carried by every report request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub mode: ViewMode,
    pub generation: u64,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Applied,
    /// Issued for another mode or an older generation
    Stale,
    /// A newer request already landed
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PollerState {
    pub view_mode: ViewMode,
    /// Bumped on every mode change
    pub generation: u64,
    pub regions: Vec<Region>,
    pub stats: DerivedStats,
    pub last_applied_seq: Option<u64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PollerState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self { view_mode, ..Default::default() }
    }

    pub fn ticket(&self, seq: u64) -> FetchTicket {
        FetchTicket { mode: self.view_mode, generation: self.generation, seq }
    }

    /// Returns false when `mode` is already active
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.view_mode {
            return false;
        }
        self.view_mode = mode;
        self.generation += 1;
        self.regions.clear();
        self.stats = DerivedStats::default();
        self.last_applied_seq = None;
        self.last_updated = None;
        true
    }

    pub fn check_ticket(&self, ticket: &FetchTicket) -> SnapshotOutcome {
        if ticket.mode != self.view_mode || ticket.generation != self.generation {
            return SnapshotOutcome::Stale;
        }
        match self.last_applied_seq {
            Some(last) if ticket.seq <= last => SnapshotOutcome::Superseded,
            _ => SnapshotOutcome::Applied,
        }
    }

    /// Replaces the region list and stats in one step if the ticket is current
    pub fn apply_snapshot(
        &mut self,
        ticket: FetchTicket,
        report: RegionsReport,
        received_at: DateTime<Utc>,
    ) -> SnapshotOutcome {
        let outcome = self.check_ticket(&ticket);
        if outcome != SnapshotOutcome::Applied {
            return outcome;
        }
        let regions = report.into_regions(ticket.mode);
        self.stats = DerivedStats::compute(&regions);
        self.regions = regions;
        self.last_applied_seq = Some(ticket.seq);
        self.last_updated = Some(received_at);
        outcome
    }
}

pub enum PollerAction {
    SetViewMode(ViewMode),
    SnapshotLoaded {
        ticket: FetchTicket,
        report: RegionsReport,
        received_at: DateTime<Utc>,
    },
}

impl Reducible for PollerState {
    type Action = PollerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PollerAction::SetViewMode(mode) => {
                if mode == self.view_mode {
                    return self;
                }
                let mut next = (*self).clone();
                next.set_view_mode(mode);
                log::info!("🔀 Modo de visualização: {} (geração {})", mode.key(), next.generation);
                Rc::new(next)
            }
            PollerAction::SnapshotLoaded { ticket, report, received_at } => {
                match self.check_ticket(&ticket) {
                    SnapshotOutcome::Applied => {}
                    outcome => {
                        log::debug!("⏭️ Snapshot #{} descartado: {:?}", ticket.seq, outcome);
                        return self;
                    }
                }
                let mut next = (*self).clone();
                next.apply_snapshot(ticket, report, received_at);
                log::debug!("📊 Snapshot #{} aplicado: {} regiões", ticket.seq, next.regions.len());
                Rc::new(next)
            }
        }
    }
}

/// Highest counts first. Works on a copy; equal counts keep their input order.
pub fn top_regions(regions: &[Region], limit: usize) -> Vec<Region> {
    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| b.accesses.cmp(&a.accesses));
    sorted.truncate(limit);
    sorted
}

pub fn ranked_list_title(mode: ViewMode) -> String {
    let noun = match mode {
        ViewMode::Cities => "cidades",
        ViewMode::States => "estados",
    };
    format!("As {} {} mais acessadas", RANKED_LIST_SIZE, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, accesses: u64) -> Region {
        Region { name: name.to_string(), latitude: -23.0, longitude: -46.0, accesses }
    }

    fn report(cidades: Vec<Region>, estados: Vec<Region>) -> RegionsReport {
        RegionsReport { cidades, estados }
    }

    #[test]
    fn test_stats_sp_rj() {
        let stats = DerivedStats::compute(&[region("SP", 1000), region("RJ", 200)]);
        assert_eq!(stats.max_accesses, 1000);
        assert_eq!(stats.most_accessed.unwrap().name, "SP");
    }

    #[test]
    fn test_stats_empty_list() {
        let stats = DerivedStats::compute(&[]);
        assert_eq!(stats, DerivedStats::default());
        assert_eq!(stats.max_accesses, 1);
        assert!(stats.most_accessed.is_none());
    }

    #[test]
    fn test_stats_floor_and_tie_break() {
        let stats = DerivedStats::compute(&[region("A", 0), region("B", 0)]);
        assert_eq!(stats.max_accesses, 1);

        let stats = DerivedStats::compute(&[region("A", 5), region("B", 9), region("C", 9)]);
        assert_eq!(stats.most_accessed.as_ref().unwrap().name, "B");
        assert!(stats.is_most_accessed(&region("C", 9)));
        assert!(!stats.is_most_accessed(&region("A", 5)));
    }

    #[test]
    fn test_applies_current_snapshot() {
        let mut state = PollerState::new(ViewMode::Cities);
        let ticket = state.ticket(1);
        let outcome = state.apply_snapshot(
            ticket,
            report(vec![region("SP", 1000), region("RJ", 200)], vec![region("MG", 5)]),
            Utc::now(),
        );
        assert_eq!(outcome, SnapshotOutcome::Applied);
        assert_eq!(state.regions.len(), 2);
        assert_eq!(state.stats.max_accesses, 1000);
        assert_eq!(state.last_applied_seq, Some(1));
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_mode_switch_discards_previous_list() {
        let mut state = PollerState::new(ViewMode::Cities);
        let old_ticket = state.ticket(1);
        state.apply_snapshot(old_ticket, report(vec![region("SP", 10)], vec![]), Utc::now());

        assert!(state.set_view_mode(ViewMode::States));
        assert!(state.regions.is_empty());
        assert_eq!(state.stats, DerivedStats::default());
        assert_eq!(state.generation, 1);

        // A cities response still in flight must not land in the states view
        let outcome = state.apply_snapshot(
            old_ticket,
            report(vec![region("SP", 10)], vec![region("SP-state", 3)]),
            Utc::now(),
        );
        assert_eq!(outcome, SnapshotOutcome::Stale);
        assert!(state.regions.is_empty());
    }

    #[test]
    fn test_same_mode_is_noop() {
        let mut state = PollerState::new(ViewMode::Cities);
        let ticket = state.ticket(1);
        state.apply_snapshot(ticket, report(vec![region("SP", 10)], vec![]), Utc::now());
        let before = state.clone();

        assert!(!state.set_view_mode(ViewMode::Cities));
        assert_eq!(state, before);
    }

    #[test]
    fn test_old_generation_of_same_mode_is_stale() {
        let mut state = PollerState::new(ViewMode::Cities);
        let first = state.ticket(1);
        state.set_view_mode(ViewMode::States);
        state.set_view_mode(ViewMode::Cities);
        assert_eq!(state.generation, 2);

        let outcome = state.apply_snapshot(first, report(vec![region("X", 1)], vec![]), Utc::now());
        assert_eq!(outcome, SnapshotOutcome::Stale);
    }

    #[test]
    fn test_older_seq_never_overwrites_newer() {
        let mut state = PollerState::new(ViewMode::States);
        let slow = state.ticket(3);
        let fast = state.ticket(4);

        state.apply_snapshot(fast, report(vec![], vec![region("SP", 50)]), Utc::now());
        let outcome = state.apply_snapshot(slow, report(vec![], vec![region("SP", 40)]), Utc::now());

        assert_eq!(outcome, SnapshotOutcome::Superseded);
        assert_eq!(state.regions[0].accesses, 50);
        assert_eq!(state.last_applied_seq, Some(4));
    }

    #[test]
    fn test_reducer_keeps_rc_for_ignored_actions() {
        let state = Rc::new(PollerState::new(ViewMode::Cities));
        let next = state.clone().reduce(PollerAction::SetViewMode(ViewMode::Cities));
        assert!(Rc::ptr_eq(&state, &next));

        let stale = FetchTicket { mode: ViewMode::States, generation: 0, seq: 1 };
        let next = state.clone().reduce(PollerAction::SnapshotLoaded {
            ticket: stale,
            report: report(vec![], vec![region("RJ", 1)]),
            received_at: Utc::now(),
        });
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(PollerAction::SetViewMode(ViewMode::States));
        assert_eq!(next.view_mode, ViewMode::States);
        assert_eq!(next.generation, 1);
    }

    #[test]
    fn test_top_regions() {
        let regions: Vec<Region> = (0..15).map(|i| region(&format!("R{}", i), i * 10)).collect();
        let top = top_regions(&regions, RANKED_LIST_SIZE);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "R14");
        assert_eq!(top[9].name, "R5");
        // input untouched
        assert_eq!(regions[0].name, "R0");

        let tied = vec![region("A", 5), region("B", 7), region("C", 5)];
        let top = top_regions(&tied, RANKED_LIST_SIZE);
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_ranked_list_title() {
        assert_eq!(ranked_list_title(ViewMode::Cities), "As 10 cidades mais acessadas");
        assert_eq!(ranked_list_title(ViewMode::States), "As 10 estados mais acessadas");
    }
}
