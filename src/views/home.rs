use yew::prelude::*;

struct InfoCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [InfoCard; 3] = [
    InfoCard {
        icon: "💡",
        title: "Energia Solar",
        text: "Fornecemos ferramentas para calcular os benefícios da energia solar e ajudá-lo a reduzir os custos de energia.",
    },
    InfoCard {
        icon: "☁️",
        title: "Reuso de Água",
        text: "Estimamos o impacto do reuso de água da chuva para maximizar os benefícios econômicos e ambientais.",
    },
    InfoCard {
        icon: "🏆",
        title: "Casos de Sucesso",
        text: "Conheça histórias reais de pessoas e empresas que adotaram práticas sustentáveis e geraram impactos positivos.",
    },
];

const VALUES: [InfoCard; 3] = [
    InfoCard {
        icon: "🌎",
        title: "Visão",
        text: "Ser uma referência em inovação tecnológica no setor de sustentabilidade, promovendo um equilíbrio entre economia e responsabilidade ambiental.",
    },
    InfoCard {
        icon: "🤝",
        title: "Missão",
        text: "Capacitar indivíduos e organizações a adotar práticas sustentáveis que promovam economia e cuidado com o planeta.",
    },
    InfoCard {
        icon: "❤️",
        title: "Valores",
        text: "Sustentabilidade, inovação, acessibilidade, educação e impacto social são os pilares que guiam o nosso trabalho.",
    },
];

fn render_cards(cards: &[InfoCard]) -> Html {
    html! {
        <div class="card-grid">
            { for cards.iter().map(|card| html! {
                <div class="card">
                    <div class="card-icon">{card.icon}</div>
                    <h4>{card.title}</h4>
                    <p>{card.text}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home">
            <section class="intro">
                <h1>{"Bem-vindo ao GreenTech!"}</h1>
                <p>
                    <strong>{"GreenTech"}</strong>
                    {" é uma plataforma projetada para integrar sustentabilidade e tecnologia de forma prática e acessível. \
                      Oferecemos soluções que capacitam indivíduos, organizações e empresas a fazer escolhas conscientes \
                      sobre o uso de recursos naturais, como energia e água."}
                </p>
                <p>
                    {"Com calculadoras de economia energética e simuladores de reaproveitamento de água, \
                      é possível entender o impacto financeiro e ambiental das ações sustentáveis."}
                </p>
            </section>

            { render_cards(&FEATURES) }

            <section class="about">
                <h3>{"Sobre o Projeto"}</h3>
                <p>
                    {"O GreenTech nasceu como um projeto interdisciplinar que alinha tecnologia e sustentabilidade \
                      para incentivar a adoção de práticas responsáveis."}
                </p>
            </section>

            <section class="values">
                <h3>{"Visão, Missão e Valores"}</h3>
                { render_cards(&VALUES) }
            </section>
        </div>
    }
}
