//! 表单控件
//!
//! 字段值放在 `RwSignal<String>` 中，校验错误整体放在一个 `RwSignal<FormErrors>`，
//! 每个控件按字段名取自己的那条。

use krishilink::{FormErrors, SubmitError};
use leptos::prelude::*;

pub fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> impl Fn() -> Option<String> {
    move || errors.with(|e| e.get(field).map(str::to_string))
}

/// 提交失败后更新错误状态：校验错误落到字段上，请求错误由提示消息负责。
pub fn show_submit_error(errors: RwSignal<FormErrors>, err: SubmitError) {
    match err {
        SubmitError::Invalid(fields) => errors.set(fields),
        SubmitError::Request(_) => errors.set(FormErrors::new()),
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let error = field_error(errors, field);
    let has_error = field_error(errors, field);
    view! {
        <label class="form-control w-full">
            <span class="label-text font-semibold">{label}</span>
            <input
                type=kind
                name=field
                placeholder=placeholder
                class="input input-bordered w-full"
                class:input-error=move || has_error().is_some()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <span class="text-error text-sm">{error}</span>
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
) -> impl IntoView {
    let error = field_error(errors, field);
    view! {
        <label class="form-control w-full">
            <span class="label-text font-semibold">{label}</span>
            <textarea
                name=field
                class="textarea textarea-bordered w-full"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <span class="text-error text-sm">{error}</span>
        </label>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    field: &'static str,
    options: Vec<&'static str>,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
) -> impl IntoView {
    let error = field_error(errors, field);
    view! {
        <label class="form-control w-full">
            <span class="label-text font-semibold">{label}</span>
            <select
                name=field
                class="select select-bordered w-full"
                prop:value=value
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt>{opt}</option> })
                    .collect_view()}
            </select>
            <span class="text-error text-sm">{error}</span>
        </label>
    }
}
