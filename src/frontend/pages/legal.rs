use leptos::prelude::*;

use crate::frontend::components::Section;

#[component]
pub fn RulesPage() -> impl IntoView {
    view! {
        <Section id="regolamento" title="Regolamento d'uso" icon="🎁">
            <div class="prose max-w-none">
                <h3>"1. Definizioni"</h3>
                <p>
                    "Tarocard: carta regalo prepagata emessa da IAT Valtaro e Valceno. \
                     Esercizi convenzionati: attività aderenti al circuito."
                </p>
                <h3>"2. Oggetto"</h3>
                <p>"Disciplina acquisto e utilizzo."</p>
                <h3>"3. Tagli e attivazione"</h3>
                <p>"15€, 25€, 50€."</p>
                <h3>"4. Validità"</h3>
                <p>"12 mesi dall'attivazione."</p>
                <h3>"5. Uso"</h3>
                <ul>
                    <li>"Una o più transazioni"</li>
                    <li>"Nessun resto"</li>
                </ul>
                <h3>"6. Rimborsi"</h3>
                <p>"Non rimborsabile dopo l'acquisto."</p>
                <h3>"7-13"</h3>
                <p>"Come definito in bozze precedenti."</p>
            </div>
        </Section>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Section id="privacy" title="Privacy e Cookie" icon="✉️">
            <p class="text-sm">"Sintesi policy come da bozze."</p>
        </Section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Section id="termini" title="Termini del servizio" icon="✅">
            <p class="text-sm">"Sintesi termini come da bozze."</p>
        </Section>
    }
}
