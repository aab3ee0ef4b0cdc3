use leptos::prelude::*;

use crate::frontend::components::{LinkButton, ButtonVariant, Section};

/// Available gift card denominations, in euro.
const DENOMINATIONS: [u32; 3] = [15, 25, 50];

/// Purchase page. Payment capture is a future collaborator (hosted
/// checkout + webhook); the page describes the plan and shows demo
/// buttons that go nowhere yet.
#[component]
pub fn PurchasePage() -> impl IntoView {
    view! {
        <Section id="acquista" title="Acquista la Tarocard" icon="🎁">
            <div class="grid md:grid-cols-2 gap-8">
                <div class="space-y-4">
                    <p class="text-neutral-700">
                        <strong>"Opzione B consigliata"</strong>
                        ": Stripe Checkout con webhook per generare codice QR al pagamento riuscito e pannello esercenti per scalare il credito."
                    </p>
                    <ol class="list-decimal pl-5 space-y-2 text-neutral-800">
                        <li><strong>"Pagamenti"</strong>": 3 prodotti (15€, 25€, 50€). Checkout con success_url e cancel_url."</li>
                        <li><strong>"Webhook"</strong>": /api/webhooks/stripe su checkout.session.completed → genera voucher."</li>
                        <li><strong>"DB"</strong>": vouchers(code, amount, amountRemaining, status, expiresAt, buyerEmail)."</li>
                        <li><strong>"Consegna"</strong>": email con PDF/QR + pagina /voucher/[code]."</li>
                        <li><strong>"Verifica negozio"</strong>": pagina protetta /esercente per validare e scalare."</li>
                        <li><strong>"Rendicontazione"</strong>": export CSV mensile."</li>
                    </ol>
                    <div class="grid sm:grid-cols-3 gap-3">
                        {DENOMINATIONS
                            .into_iter()
                            .map(|val| {
                                view! {
                                    <div class="rounded-2xl border p-4">
                                        <div class="text-sm text-neutral-500">"Taglio"</div>
                                        <div class="text-2xl font-bold">{format!("{val}€")}</div>
                                        <LinkButton href="#" class="mt-3 w-full" variant=ButtonVariant::Primary>
                                            "Paga demo"
                                        </LinkButton>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-sm text-neutral-500">
                        "Collega i pulsanti a Stripe quando l'account sarà attivo."
                    </p>
                </div>
                <div class="rounded-3xl border p-6">
                    <h3 class="font-semibold text-lg mb-2">"Checklist tecnica minima"</h3>
                    <ul class="list-disc pl-5 space-y-2 text-neutral-800">
                        <li>"Stripe Checkout + webhook firmato"</li>
                        <li>"Generazione codici/QR"</li>
                        <li>"Email di consegna"</li>
                        <li>"Stati voucher (attivo/scalato/scaduto)"</li>
                        <li>"Portale esercenti"</li>
                        <li>"Privacy / Termini / Cookie banner"</li>
                    </ul>
                </div>
            </div>
        </Section>
    }
}
