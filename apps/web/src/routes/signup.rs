use crate::components::{Alert, AlertKind, AppShell, Button, CheckboxField, TextField};
use crate::features::{
    auth::{flow, Registration},
    forms::{Field, Form, FormKind},
    navigation::Route,
};
use crate::state::{use_session, ServicesHandle};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();
    let form = RwSignal::new(Form::new(FormKind::Signup));
    let (error, set_error) = signal::<Option<String>>(None);

    let signup_action = Action::new_local(move |registration: &Registration| {
        let registration = registration.clone();
        let services = services.get_value();
        async move {
            flow::complete_signup(
                &registration,
                services.auth.as_ref(),
                services.sessions.as_ref(),
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(user) => {
                    session.set_user(user);
                    navigate(Route::Dashboard.path(), Default::default());
                }
                Err(err) => set_error.set(err.banner()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if signup_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        if let Some(Ok(registration)) = form.try_update(flow::prepare_signup) {
            signup_action.dispatch(registration);
        }
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-[#f4f4f4] mb-2">"Create Account"</h1>
                    <p class="text-[#a1a1a1]">"Join WindowFix Pro for easy service booking"</p>
                </div>
                <form class="space-y-6" on:submit=on_submit novalidate>
                    <TextField
                        form=form
                        field=Field::Name
                        label="Full Name"
                        placeholder="Enter your full name"
                        autocomplete="name"
                        icon="person"
                    />
                    <TextField
                        form=form
                        field=Field::Phone
                        label="Phone Number"
                        input_type="tel"
                        placeholder="Enter your phone number"
                        autocomplete="tel"
                        icon="call"
                    />
                    <TextField
                        form=form
                        field=Field::Email
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter your email address"
                        autocomplete="email"
                        icon="mail"
                    />
                    <TextField
                        form=form
                        field=Field::Password
                        label="Password"
                        input_type="password"
                        placeholder="Create a password"
                        autocomplete="new-password"
                        icon="lock"
                    />
                    <TextField
                        form=form
                        field=Field::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                        autocomplete="new-password"
                        icon="lock"
                    />
                    <CheckboxField form=form field=Field::Terms>
                        "I agree to the Terms of Service and Privacy Policy"
                    </CheckboxField>
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                    <Button
                        button_type="submit"
                        busy=signup_action.pending()
                        busy_label="Creating Account..."
                    >
                        "Create Account"
                    </Button>
                </form>
                <p class="mt-8 text-center text-[#a1a1a1]">
                    "Already have an account? "
                    <A href=Route::Login.path() {..} class="text-[#b8a47e] font-medium">
                        "Sign in"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
