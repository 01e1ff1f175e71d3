use yew::prelude::*;

use crate::components::{SelectField, TextField};
use crate::hooks::{use_notifier, use_session};
use crate::models::{Address, PluvialEconomy};
use crate::services::ApiClient;
use crate::viewmodels::forms::PluvialForm;

#[function_component(PluvialCalculatorPage)]
pub fn pluvial_calculator_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let addresses = use_state(Vec::<Address>::new);
    let form = use_state(PluvialForm::default);
    let result = use_state(|| None::<PluvialEconomy>);

    {
        let addresses = addresses.clone();
        let notifier = notifier.clone();
        use_effect_with(session.user_id(), move |user_id| {
            match *user_id {
                Some(id) => wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().get_person(id).await {
                        Ok(person) => addresses.set(person.enderecos),
                        Err(e) => notifier.app_error("Erro ao carregar endereços", &e),
                    }
                }),
                None => notifier.warning("Usuário não autenticado."),
            }
            || ()
        });
    }

    let on_address = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(PluvialForm { address_id: value.parse().ok(), ..(*form).clone() });
        })
    };

    let on_area = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(PluvialForm { roof_area: value, ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let result = result.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (address_id, area) = match form.validate() {
                Ok(values) => values,
                Err(e) => return notifier.app_error("Erro ao realizar o cálculo", &e),
            };
            let result = result.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().pluvial_economy(address_id, area).await {
                    Ok(economy) => {
                        result.set(Some(economy));
                        notifier.success("Cálculo realizado com sucesso!");
                    }
                    Err(e) => notifier.app_error("Erro ao realizar o cálculo", &e),
                }
            });
        })
    };

    let options: Vec<(String, String)> = addresses
        .iter()
        .filter_map(|a| a.endereco_id.map(|id| (id.to_string(), a.label())))
        .collect();
    let selected = form.address_id.map(|id| id.to_string()).unwrap_or_default();

    html! {
        <div class="page pluvial-calculator">
            <div class="card">
                <h3>{"Calculadora de Economia Pluvial"}</h3>
                if addresses.is_empty() {
                    <div class="notice-box">
                        {"Você ainda não tem um endereço cadastrado. Por favor, vá para a página de \
                          Configurações para adicionar um endereço."}
                    </div>
                } else {
                    <form {onsubmit}>
                        <div class="divider">{"Endereço"}</div>
                        <SelectField id="pluvial-address" label="Selecione o Endereço" value={selected}
                            {options} on_change={on_address} placeholder={Some(AttrValue::from("Selecione um endereço"))} />
                        <TextField id="pluvial-area" label="Área de Captação do Telhado (em m²)" input_type="number"
                            placeholder="Exemplo: 50" required=true value={form.roof_area.clone()} on_change={on_area} />
                        <button type="submit" class="btn btn-primary btn-block">{"Calcular Economia Pluvial"}</button>
                    </form>
                }
                if let Some(economy) = (*result).clone() {
                    <div class="result">
                        <h4>{"Resultado do Cálculo"}</h4>
                        { for economy.quarters().into_iter().map(|(quarter, value)| html! {
                            <p>
                                <strong>{format!("Consumo no {} Trimestre:", quarter)}</strong>
                                {format!(" {} m³ ou Litros", value)}
                            </p>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
