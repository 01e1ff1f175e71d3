use yew::prelude::*;

use crate::components::{SelectField, TextField};
use crate::hooks::{use_notifier, use_session};
use crate::models::{Connection, EconomyResult};
use crate::services::ApiClient;
use crate::viewmodels::forms::EconomyForm;

fn result_row(label: &str, value: f64) -> Html {
    html! {
        <div class="result-row">
            <strong>{label}</strong>
            <span>{format!("{:.2}", value)}</span>
        </div>
    }
}

#[function_component(EconomyCalculatorPage)]
pub fn economy_calculator_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let form = use_state(EconomyForm::default);
    let result = use_state(|| None::<EconomyResult>);

    let update = |apply: fn(&mut EconomyForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let update_month = |index: usize| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.consumption_list[index] = value;
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let result = result.clone();
        let notifier = notifier.clone();
        let user_id = session.user_id();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request(user_id) {
                Ok(request) => request,
                Err(e) => return notifier.app_error("Erro ao calcular economia", &e),
            };
            let result = result.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().calc_economy(&request).await {
                    Ok(payload) => result.set(Some(payload)),
                    Err(e) => notifier.app_error("Erro ao calcular economia", &e),
                }
            });
        })
    };

    let connections: Vec<(String, String)> = Connection::all()
        .iter()
        .map(|c| (c.as_str().to_string(), c.display_name().to_string()))
        .collect();

    html! {
        <div class="page economy-calculator">
            <div class="card">
                <h3>{"Calculadora de Economia Fotovoltaica"}</h3>
                <form {onsubmit}>
                    <div class="divider">{"Última Conta"}</div>
                    <TextField id="eco-bill-value" label="Valor da Última Conta (em R$)" input_type="number"
                        placeholder="Exemplo: 280.00" required=true value={form.last_bill_value.clone()}
                        on_change={update(|f, v| f.last_bill_value = v)} />
                    <TextField id="eco-bill-consumption" label="Consumo da Última Conta (em kWh)" input_type="number"
                        placeholder="Exemplo: 350" required=true value={form.last_bill_consumption.clone()}
                        on_change={update(|f, v| f.last_bill_consumption = v)} />

                    <div class="divider">{"Consumos dos Últimos 6 Meses (em kWh)"}</div>
                    <div class="form-grid">
                        { for form.consumption_list.iter().enumerate().map(|(i, value)| html! {
                            <TextField id={format!("eco-month-{}", i)} label={format!("Mês {}", i + 1)}
                                input_type="number" placeholder="Consumo em kWh" required=true
                                value={value.clone()} on_change={update_month(i)} />
                        }) }
                    </div>

                    <div class="divider">{"Informações Adicionais"}</div>
                    <TextField id="eco-kw-value" label="Valor do kWh (em R$)" input_type="number"
                        placeholder="Exemplo: 0.75" required=true value={form.kw_value.clone()}
                        on_change={update(|f, v| f.kw_value = v)} />
                    <SelectField id="eco-connection" label="Tipo de Conexão" value={form.connection.as_str().to_string()}
                        options={connections} on_change={update(|f, v| f.connection = Connection::parse(&v))} />
                    <button type="submit" class="btn btn-primary btn-block">{"Calcular Economia"}</button>
                </form>
            </div>
            if let Some(r) = (*result).clone() {
                <div class="card result">
                    <h4>{"Detalhes da Economia - Conta de Energia"}</h4>
                    { result_row("Consumo Médio Mensal (kWh):", r.average_consumption_kw) }
                    { result_row("Valor Médio da Conta (R$):", r.average_bill_value) }
                    { result_row("Iluminação Pública (R$):", r.public_lighting) }
                    { result_row("Valor Mínimo da Conta (R$):", r.min_bill_value) }
                    <div class="result-row highlight">
                        <strong>{"Economia Média (R$):"}</strong>
                        <span>{format!("{:.2}", r.average_bill_economy)}</span>
                    </div>
                </div>
            }
        </div>
    }
}
