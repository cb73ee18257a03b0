use contracts::domain::a002_lookup::LookupOption;
use leptos::prelude::*;

/// Native `<select>` over category/addon options.
///
/// `value` is the selected option's `value_key()`; the empty entry maps to "".
/// Options without an id cannot be chosen.
#[component]
pub fn LookupSelect(
    id: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<LookupOption>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            >
                <option value="">"- pilih -"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let key = option.value_key();
                            let current = key.clone();
                            let selectable = option.value.is_some();
                            view! {
                                <option
                                    value=key
                                    selected=move || value.get() == current
                                    disabled=!selectable
                                >
                                    {option.label_text().to_string()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
