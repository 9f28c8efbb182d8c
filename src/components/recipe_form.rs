//! Recipe Form Component
//!
//! Add and edit forms. Fields validate on blur with the same rules the submit
//! applies; an optional image is previewed and uploaded after the save.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_api::ApiError;
use web_sys::{File, HtmlInputElement};

use crate::actions::{submit_recipe, ChosenImage, SubmitError, SubmitMode};
use crate::browser;
use crate::context::use_app_context;
use crate::form::{check_image_size, validate_field, FormField, RecipeForm};

type FieldErrors = BTreeMap<FormField, &'static str>;

#[derive(Clone, Copy)]
enum Control {
    Text,
    Number,
    TextArea(u32),
    Select(&'static [(&'static str, &'static str)]),
}

struct FieldDef {
    field: FormField,
    label: &'static str,
    control: Control,
    placeholder: Option<&'static str>,
}

const DIFFICULTIES: &[(&str, &str)] = &[
    ("", "Select difficulty"),
    ("easy", "Easy"),
    ("medium", "Medium"),
    ("hard", "Hard"),
];

const FIELDS: &[FieldDef] = &[
    FieldDef {
        field: FormField::Name,
        label: "Recipe name *",
        control: Control::Text,
        placeholder: None,
    },
    FieldDef {
        field: FormField::Description,
        label: "Description",
        control: Control::TextArea(3),
        placeholder: Some("A short description of the dish"),
    },
    FieldDef {
        field: FormField::Ingredients,
        label: "Ingredients *",
        control: Control::TextArea(6),
        placeholder: Some("One ingredient per line"),
    },
    FieldDef {
        field: FormField::Instructions,
        label: "Instructions *",
        control: Control::TextArea(8),
        placeholder: Some("One step per line"),
    },
    FieldDef {
        field: FormField::PrepTime,
        label: "Prep time (min)",
        control: Control::Number,
        placeholder: None,
    },
    FieldDef {
        field: FormField::CookTime,
        label: "Cook time (min)",
        control: Control::Number,
        placeholder: None,
    },
    FieldDef {
        field: FormField::Servings,
        label: "Servings",
        control: Control::Number,
        placeholder: None,
    },
    FieldDef {
        field: FormField::Difficulty,
        label: "Difficulty",
        control: Control::Select(DIFFICULTIES),
        placeholder: None,
    },
    FieldDef {
        field: FormField::Category,
        label: "Category",
        control: Control::Text,
        placeholder: Some("breakfast, dinner, dessert..."),
    },
    FieldDef {
        field: FormField::Tags,
        label: "Tags",
        control: Control::Text,
        placeholder: Some("vegetarian, quick, summer"),
    },
];

#[component]
pub fn RecipeFormPage(mode: SubmitMode, image_preview: bool, field_validation: bool) -> impl IntoView {
    let ctx = use_app_context();
    let is_create = mode == SubmitMode::Create;
    let mode = StoredValue::new(mode);

    let form = RwSignal::new(RecipeForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let preview = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let image_file = StoredValue::new_local(None::<File>);
    let image_input = NodeRef::<leptos::html::Input>::new();

    // Edit mode: pre-fill from the stored recipe
    Effect::new(move |_| {
        let SubmitMode::Edit(id) = mode.get_value() else { return };
        spawn_local(async move {
            match ctx.api().fetch(&id).await {
                Ok(recipe) => {
                    form.set(RecipeForm::from_recipe(&recipe));
                    preview.set(recipe.image_url.filter(|url| !url.trim().is_empty()));
                }
                Err(ApiError::NotFound(_)) => ctx.toasts.error("Recipe not found"),
                Err(e) => {
                    log::error!("Loading recipe {} for edit failed: {}", id, e);
                    ctx.toasts.error("Error loading recipe");
                }
            }
        });
    });

    let clear_image = move || {
        image_file.set_value(None);
        if let Some(input) = image_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            image_file.set_value(None);
            preview.set(None);
            return;
        };
        if let Err(message) = check_image_size(file.size()) {
            ctx.toasts.error(message);
            clear_image();
            return;
        }
        image_file.set_value(Some(file.clone()));
        if image_preview {
            spawn_local(async move {
                match browser::read_data_url(&file).await {
                    Ok(url) => preview.set(Some(url)),
                    Err(e) => log::warn!("Image preview failed: {:?}", e),
                }
            });
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let current = form.get_untracked();
        let mode = mode.get_value();
        let file = image_file.get_value();

        spawn_local(async move {
            let image = match file {
                Some(file) => Some(match browser::read_image(&file).await {
                    Ok(image) => ChosenImage::Ready(image),
                    Err(e) => {
                        log::warn!("Reading image {} failed: {:?}", file.name(), e);
                        ChosenImage::Unreadable(format!("{:?}", e))
                    }
                }),
                None => None,
            };

            match submit_recipe(&ctx.api(), &mode, &current, image).await {
                Ok(outcome) => {
                    ctx.toasts.success(if is_create {
                        "Recipe created successfully"
                    } else {
                        "Recipe updated successfully"
                    });
                    if outcome.image.is_failure() {
                        ctx.toasts.warning("Recipe saved, but there was an error uploading the image");
                    }
                    errors.set(FieldErrors::new());
                    clear_image();
                    if is_create {
                        form.set(RecipeForm::default());
                        preview.set(None);
                    } else {
                        form.set(RecipeForm::from_recipe(&outcome.recipe));
                        preview.set(outcome.recipe.image_url);
                    }
                }
                Err(SubmitError::Validation(invalid)) => {
                    errors.set(invalid.errors.iter().map(|e| (e.field, e.message)).collect());
                    ctx.toasts.error(invalid.to_string());
                }
                Err(SubmitError::Write(_)) => {
                    ctx.toasts.error(if is_create {
                        "Error creating recipe"
                    } else {
                        "Error updating recipe"
                    });
                }
            }
            submitting.set(false);
        });
    };

    let (form_id, title, submit_label) = if is_create {
        ("add-recipe-form", "Add Recipe", "Save Recipe")
    } else {
        ("edit-recipe-form", "Edit Recipe", "Update Recipe")
    };

    view! {
        <section class="recipe-form-section">
            <h2>{title}</h2>
            <form id=form_id class="recipe-form" on:submit=on_submit novalidate=true>
                {FIELDS
                    .iter()
                    .map(|def| field_row(def, form, errors, field_validation))
                    .collect_view()}

                <div class="form-group">
                    <label for="image">"Image"</label>
                    <input
                        type="file"
                        id="image"
                        name="image"
                        accept="image/*"
                        node_ref=image_input
                        on:change=on_image_change
                    />
                    <div id="image-preview" class="image-preview">
                        {move || preview.get().map(|src| view! { <img src=src alt="Preview" /> })}
                    </div>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {submit_label}
                    </button>
                    <a href=ctx.href("index.html") class="btn btn-outline">"Cancel"</a>
                </div>
            </form>
        </section>
    }
}

fn field_row(
    def: &'static FieldDef,
    form: RwSignal<RecipeForm>,
    errors: RwSignal<FieldErrors>,
    validate_on_blur: bool,
) -> impl IntoView {
    let field = def.field;
    let name = field.name();
    let value = move || form.with(|f| f.get(field).to_string());
    let error = move || errors.with(|e| e.get(&field).copied());
    let class = move || {
        if error().is_some() {
            "form-control error"
        } else {
            "form-control"
        }
    };

    // Typing clears the field's error; leaving the field re-checks it
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
        errors.update(|e| {
            e.remove(&field);
        });
    };
    let on_blur = move |_: web_sys::FocusEvent| {
        if !validate_on_blur {
            return;
        }
        let result = form.with_untracked(|f| validate_field(field, f.get(field)));
        errors.update(|e| match result {
            Ok(()) => {
                e.remove(&field);
            }
            Err(message) => {
                e.insert(field, message);
            }
        });
    };

    let control = match def.control {
        Control::Text => view! {
            <input
                type="text"
                id=name
                name=name
                class=class
                placeholder=def.placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
        Control::Number => view! {
            <input
                type="number"
                min="1"
                id=name
                name=name
                class=class
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
        Control::TextArea(rows) => view! {
            <textarea
                id=name
                name=name
                rows=rows.to_string()
                class=class
                placeholder=def.placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        Control::Select(options) => view! {
            <select id=name name=name class=class prop:value=value on:change=on_input on:blur=on_blur>
                {options
                    .iter()
                    .map(|(option, label)| view! { <option value=*option>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=name>{def.label}</label>
            {control}
            {move || error().map(|message| view! { <div class="field-error">{message}</div> })}
        </div>
    }
}
