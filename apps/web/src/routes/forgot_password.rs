//! Forgot-password page driving a [`RecoveryWizard`]. The page runs each
//! pending request against the OTP collaborator and feeds the outcome back;
//! leaving the page cancels whatever is still in flight.

use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::{
    forms::Field,
    navigation::Route,
    recovery::{PendingRequest, RecoveryWizard, StepKind},
};
use crate::state::ServicesHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use tracing::warn;

const INPUT_OK: &str = "border-white/10 focus:border-[#b8a47e] focus:ring-[#b8a47e]";
const INPUT_ERROR: &str = "border-red-500 focus:border-red-500 focus:ring-red-500";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();
    let wizard = RwSignal::new(RecoveryWizard::new());
    let (reset_notice, set_reset_notice) = signal(false);

    let step = Memo::new(move |_| wizard.with(|wizard| wizard.step().kind()));
    let busy = Signal::derive(move || wizard.with(RecoveryWizard::is_busy));
    let flow_error = move || wizard.with(|wizard| wizard.flow_error().map(str::to_string));
    let phone = move || {
        wizard.with(|wizard| wizard.step().phone().unwrap_or_default().to_string())
    };

    let run = move |request: PendingRequest| {
        let otp = services.get_value().otp;
        spawn_local(async move {
            let outcome = request.action.perform(otp.as_ref()).await;
            let applied = wizard.try_update(|wizard| wizard.complete(request.ticket, outcome));
            if let Some(Err(err)) = applied {
                warn!(error = %err, "recovery completion rejected");
            }
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(request)) = wizard.try_update(RecoveryWizard::submit) {
            run(request);
        }
    };

    let on_resend = move |_| {
        if let Some(Ok(request)) = wizard.try_update(RecoveryWizard::resend) {
            run(request);
        }
    };

    let on_back = move |_| {
        let route = wizard.try_update(RecoveryWizard::exit).unwrap_or(Route::Login);
        navigate(route.path(), Default::default());
    };

    on_cleanup(move || {
        wizard.try_update(RecoveryWizard::cancel);
    });

    let field_view = move |field: Field, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        let error = move || wizard.with(|wizard| wizard.form().error(field).map(str::to_string));
        let class = move || {
            let state = if error().is_some() { INPUT_ERROR } else { INPUT_OK };
            let extra = if field == Field::Otp { " text-center text-2xl tracking-widest" } else { "" };
            format!(
                "w-full px-4 py-3 bg-white/5 border rounded-lg text-[#f4f4f4] placeholder-[#a1a1a1] focus:outline-none focus:ring-1 transition-colors {state}{extra}"
            )
        };
        view! {
            <div>
                <label for=field.as_str() class="block text-sm font-medium text-[#f4f4f4] mb-2">
                    {label}
                </label>
                <input
                    id=field.as_str()
                    name=field.as_str()
                    type=input_type
                    class=class
                    placeholder=placeholder
                    maxlength=(field == Field::Otp).then_some("6")
                    prop:value=move || wizard.with(|wizard| wizard.form().text(field).to_string())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        wizard.update(|wizard| wizard.set_text(field, value));
                    }
                />
                {move || error().map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })}
            </div>
        }
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
                <div class="mb-6">
                    <button
                        type="button"
                        class="inline-flex items-center text-[#a1a1a1] hover:text-[#b8a47e] transition-colors"
                        on:click=on_back
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                        "Back to Login"
                    </button>
                </div>
                {move || match step.get() {
                    StepKind::Phone => view! {
                        <div class="text-center mb-8">
                            <span class="material-symbols-outlined text-4xl text-[#b8a47e]">"call"</span>
                            <h1 class="text-2xl font-bold text-[#f4f4f4] mb-2">"Forgot Password?"</h1>
                            <p class="text-[#a1a1a1]">"Enter your phone number to receive an OTP"</p>
                        </div>
                        <form class="space-y-6" on:submit=on_submit novalidate>
                            {field_view(Field::Phone, "Phone Number", "tel", "Enter your phone number")}
                            {move || flow_error().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                            <Button button_type="submit" busy=busy busy_label="Sending OTP...">
                                "Send OTP"
                            </Button>
                        </form>
                    }
                    .into_any(),
                    StepKind::Otp => view! {
                        <div class="text-center mb-8">
                            <span class="material-symbols-outlined text-4xl text-[#b8a47e]">"sms"</span>
                            <h1 class="text-2xl font-bold text-[#f4f4f4] mb-2">"Enter OTP"</h1>
                            <p class="text-[#a1a1a1]">
                                "We've sent a 6-digit code to" <br />
                                <span class="text-[#b8a47e] font-medium">{phone}</span>
                            </p>
                        </div>
                        <form class="space-y-6" on:submit=on_submit novalidate>
                            {field_view(Field::Otp, "Enter OTP", "text", "000000")}
                            {move || flow_error().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                            <Button button_type="submit" busy=busy busy_label="Verifying OTP...">
                                "Verify OTP"
                            </Button>
                            <div class="text-center">
                                <p class="text-[#a1a1a1] text-sm mb-2">"Didn't receive the code?"</p>
                                <button
                                    type="button"
                                    class="text-[#b8a47e] hover:text-[#b8a47e]/80 font-medium transition-colors disabled:opacity-50"
                                    disabled=move || busy.get()
                                    on:click=on_resend
                                >
                                    "Resend OTP"
                                </button>
                            </div>
                        </form>
                    }
                    .into_any(),
                    StepKind::Success => view! {
                        <div class="text-center mb-8">
                            <span class="material-symbols-outlined text-4xl text-green-500">"check_circle"</span>
                            <h1 class="text-2xl font-bold text-[#f4f4f4] mb-2">"OTP Verified!"</h1>
                            <p class="text-[#a1a1a1]">"You can now reset your password"</p>
                        </div>
                        <div class="space-y-4">
                            <Show when=move || reset_notice.get()>
                                <Alert
                                    kind=AlertKind::Info
                                    message="Password reset is not available yet.".to_string()
                                />
                            </Show>
                            <button
                                type="button"
                                class="w-full bg-[#b8a47e] text-black py-3 px-4 rounded-lg font-semibold hover:bg-[#b8a47e]/90 transition-colors"
                                on:click=move |_| set_reset_notice.set(true)
                            >
                                "Reset Password"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
