//! Inputs bound to a [`Form`] signal. Typing clears that field's error only;
//! messages come back on the next submit.

use crate::features::forms::{Field, Form};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border rounded-lg text-[#f4f4f4] placeholder-[#a1a1a1] focus:outline-none focus:ring-1 transition-colors";
const INPUT_OK: &str = "border-white/10 focus:border-[#b8a47e] focus:ring-[#b8a47e]";
const INPUT_ERROR: &str = "border-red-500 focus:border-red-500 focus:ring-red-500";

fn error_of(form: RwSignal<Form>, field: Field) -> Option<String> {
    form.with(|form| form.error(field).map(str::to_string))
}

#[component]
pub fn TextField(
    form: RwSignal<Form>,
    field: Field,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
    /// Renders a textarea instead of a single-line input.
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let id = field.as_str();
    let class = move || {
        let state = if error_of(form, field).is_some() {
            INPUT_ERROR
        } else {
            INPUT_OK
        };
        let padding = if icon.is_some() { " pl-12" } else { "" };
        format!("{INPUT_CLASS} {state}{padding}")
    };
    let value = move || form.with(|form| form.text(field).to_string());

    let control = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows="5"
                class=class
                placeholder=placeholder.unwrap_or_default()
                prop:value=value
                on:input=move |event| {
                    let value = event_target_value(&event);
                    form.update(|form| form.set_text(field, value));
                }
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=class
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=value
                on:input=move |event| {
                    let value = event_target_value(&event);
                    form.update(|form| form.set_text(field, value));
                }
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-[#f4f4f4] mb-2">
                {label}
            </label>
            <div class="relative">
                {icon
                    .map(|icon| {
                        view! {
                            <span class="material-symbols-outlined absolute left-3 top-1/2 -translate-y-1/2 text-[#a1a1a1]">
                                {icon}
                            </span>
                        }
                    })}
                {control}
            </div>
            {move || {
                error_of(form, field)
                    .map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
            }}
        </div>
    }
}

#[component]
pub fn CheckboxField(form: RwSignal<Form>, field: Field, children: Children) -> impl IntoView {
    let id = field.as_str();
    view! {
        <div>
            <label for=id class="flex items-start gap-2 text-sm text-[#a1a1a1]">
                <input
                    id=id
                    name=id
                    type="checkbox"
                    class="mt-1 accent-[#b8a47e]"
                    prop:checked=move || form.with(|form| form.flag(field))
                    on:change=move |event| {
                        let checked = event_target_checked(&event);
                        form.update(|form| form.set_flag(field, checked));
                    }
                />
                <span>{children()}</span>
            </label>
            {move || {
                error_of(form, field)
                    .map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
            }}
        </div>
    }
}
