//! Scalar inputs carried by some operations.

use leptos::prelude::*;

use super::state::FormState;
use crate::config::{PAGES_PLACEHOLDER, ROTATION_ANGLES};
use crate::models::ExtraField;

stylance::import_crate_style!(css, "src/components/operation/operation.module.css");

#[component]
pub fn ExtraFields(state: FormState) -> impl IntoView {
    match state.spec.extra {
        Some(field @ ExtraField::Pages) => view! {
            <label class=css::field>
                <span class=css::fieldLabel>"Pages to extract"</span>
                <input
                    type="text"
                    class=css::textInput
                    name=field.name()
                    placeholder=PAGES_PLACEHOLDER
                    prop:value=move || state.pages.get()
                    on:input=move |ev| state.pages.set(event_target_value(&ev))
                />
            </label>
        }
        .into_any(),
        Some(field @ ExtraField::Angle) => view! {
            <label class=css::field>
                <span class=css::fieldLabel>"Rotation"</span>
                <select
                    class=css::select
                    name=field.name()
                    on:change=move |ev| {
                        if let Ok(angle) = event_target_value(&ev).parse::<u16>() {
                            state.angle.set(angle);
                        }
                    }
                >
                    {ROTATION_ANGLES
                        .iter()
                        .map(|&angle| {
                            view! {
                                <option
                                    value=angle.to_string()
                                    selected=move || state.angle.get() == angle
                                >
                                    {format!("{}° clockwise", angle)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        }
        .into_any(),
        None => ().into_any(),
    }
}
