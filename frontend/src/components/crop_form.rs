//! 作物表单状态
//!
//! 把零散的 signal 整合为 `CropFormState`：持有数据、重置、与 `CropForm` 互转。
//! 新增与编辑共用。

use super::form::{SelectField, TextArea, TextField};
use krishilink::FormErrors;
use krishilink::validation::CropForm;
use leptos::prelude::*;

/// `RwSignal` 实现了 `Copy`，整个状态可以直接作为 Props 传递。
#[derive(Clone, Copy)]
pub struct CropFormState {
    pub name: RwSignal<String>,
    pub crop_type: RwSignal<String>,
    pub price_per_unit: RwSignal<String>,
    pub unit: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub description: RwSignal<String>,
    pub location: RwSignal<String>,
    pub image: RwSignal<String>,
    pub errors: RwSignal<FormErrors>,
}

impl CropFormState {
    pub fn new() -> Self {
        Self::from_form(CropForm::default())
    }

    pub fn from_form(form: CropForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            crop_type: RwSignal::new(form.crop_type),
            price_per_unit: RwSignal::new(form.price_per_unit),
            unit: RwSignal::new(form.unit),
            quantity: RwSignal::new(form.quantity),
            description: RwSignal::new(form.description),
            location: RwSignal::new(form.location),
            image: RwSignal::new(form.image),
            errors: RwSignal::new(FormErrors::new()),
        }
    }

    pub fn load(&self, form: CropForm) {
        self.name.set(form.name);
        self.crop_type.set(form.crop_type);
        self.price_per_unit.set(form.price_per_unit);
        self.unit.set(form.unit);
        self.quantity.set(form.quantity);
        self.description.set(form.description);
        self.location.set(form.location);
        self.image.set(form.image);
        self.errors.set(FormErrors::new());
    }

    pub fn reset(&self) {
        self.load(CropForm::default());
    }

    pub fn to_form(&self) -> CropForm {
        CropForm {
            name: self.name.get_untracked(),
            crop_type: self.crop_type.get_untracked(),
            price_per_unit: self.price_per_unit.get_untracked(),
            unit: self.unit.get_untracked(),
            quantity: self.quantity.get_untracked(),
            description: self.description.get_untracked(),
            location: self.location.get_untracked(),
            image: self.image.get_untracked(),
        }
    }
}

#[component]
pub fn CropFields(state: CropFormState) -> impl IntoView {
    let errors = state.errors;
    let types = CropForm::type_options();
    let units = CropForm::unit_options();

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <TextField label="Crop Name" field="name" value=state.name errors=errors placeholder="e.g. Tomato" />
            <SelectField label="Type" field="crop_type" options=types value=state.crop_type errors=errors />
            <TextField label="Price per Unit" field="price_per_unit" value=state.price_per_unit errors=errors kind="number" />
            <SelectField label="Unit" field="unit" options=units value=state.unit errors=errors />
            <TextField label="Estimated Quantity" field="quantity" value=state.quantity errors=errors kind="number" />
            <TextField label="Location" field="location" value=state.location errors=errors />
            <TextField label="Image URL" field="image" value=state.image errors=errors kind="url" />
        </div>
        <TextArea label="Description" field="description" value=state.description errors=errors />
    }
}
