use crate::components::{Alert, AlertKind, AppShell, Button, CheckboxField, TextField};
use crate::features::{
    auth::{flow, Credentials},
    forms::{Field, Form, FormKind},
    navigation::Route,
};
use crate::state::{use_session, ServicesHandle};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();
    let form = RwSignal::new(Form::new(FormKind::Login));
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let services = services.get_value();
        async move {
            flow::complete_login(
                &credentials,
                services.auth.as_ref(),
                services.sessions.as_ref(),
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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
        if login_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        if let Some(Ok(credentials)) = form.try_update(flow::prepare_login) {
            login_action.dispatch(credentials);
        }
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-[#f4f4f4] mb-2">"Welcome Back"</h1>
                    <p class="text-[#a1a1a1]">"Sign in to your WindowFix Pro account"</p>
                </div>
                <form class="space-y-6" on:submit=on_submit novalidate>
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
                        field=Field::Password
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        autocomplete="current-password"
                        icon="lock"
                    />
                    <div class="flex items-center justify-between">
                        <CheckboxField form=form field=Field::Remember>
                            "Remember me"
                        </CheckboxField>
                        <A
                            href=Route::ForgotPassword.path()
                            {..}
                            class="text-sm text-[#b8a47e] hover:text-[#b8a47e]/80"
                        >
                            "Forgot password?"
                        </A>
                    </div>
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                    <Button button_type="submit" busy=login_action.pending() busy_label="Signing In...">
                        "Sign In"
                    </Button>
                </form>
                <p class="mt-8 text-center text-[#a1a1a1]">
                    "Don't have an account? "
                    <A href=Route::Signup.path() {..} class="text-[#b8a47e] font-medium">
                        "Sign up"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
