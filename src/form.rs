//! Recipe Form Validation & Mapping
//!
//! Turns raw form field values into a `RecipePayload`. The per-field rules are
//! shared by blur validation and submit validation so both always agree.

use std::fmt;

use recipe_api::{Recipe, RecipePayload};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 3;
pub const INGREDIENTS_MIN_CHARS: usize = 10;
pub const INSTRUCTIONS_MIN_CHARS: usize = 20;

/// Largest image accepted for preview and upload (5 MiB)
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Named inputs of the add/edit recipe forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Description,
    Ingredients,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    Difficulty,
    Category,
    Tags,
}

impl FormField {
    /// Form order; also the order errors are reported in
    pub const ALL: [FormField; 10] = [
        FormField::Name,
        FormField::Description,
        FormField::Ingredients,
        FormField::Instructions,
        FormField::PrepTime,
        FormField::CookTime,
        FormField::Servings,
        FormField::Difficulty,
        FormField::Category,
        FormField::Tags,
    ];

    /// The input's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
            FormField::Ingredients => "ingredients",
            FormField::Instructions => "instructions",
            FormField::PrepTime => "prep_time",
            FormField::CookTime => "cook_time",
            FormField::Servings => "servings",
            FormField::Difficulty => "difficulty",
            FormField::Category => "category",
            FormField::Tags => "tags",
        }
    }
}

/// Check one field value; `Err` carries the message shown next to the input
pub fn validate_field(field: FormField, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    let chars = value.chars().count();
    match field {
        FormField::Name if chars < NAME_MIN_CHARS => Err("Name must be at least 3 characters"),
        FormField::Ingredients if chars < INGREDIENTS_MIN_CHARS => {
            Err("Ingredients must be at least 10 characters")
        }
        FormField::Instructions if chars < INSTRUCTIONS_MIN_CHARS => {
            Err("Instructions must be at least 20 characters")
        }
        FormField::PrepTime | FormField::CookTime | FormField::Servings => {
            parse_positive(value).map(|_| ())
        }
        _ => Ok(()),
    }
}

/// Blank -> `None`; otherwise an integer >= 1
fn parse_positive(value: &str) -> Result<Option<u32>, &'static str> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(Some(n)),
        _ => Err("Must be a whole number greater than 0"),
    }
}

pub fn check_image_size(size_bytes: f64) -> Result<(), &'static str> {
    if size_bytes > MAX_IMAGE_BYTES {
        Err("The image is too large. Maximum 5MB.")
    } else {
        Ok(())
    }
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Every rule the submitted form violates, in form order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn has(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation errors:")?;
        for error in &self.errors {
            write!(f, "\n{}", error.message)?;
        }
        Ok(())
    }
}

/// Raw text of the recipe form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeForm {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub category: String,
    pub tags: String,
}

impl RecipeForm {
    /// Pre-fill for editing an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let number = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
        let text = |s: &Option<String>| s.clone().unwrap_or_default();
        Self {
            name: recipe.name.clone(),
            description: text(&recipe.description),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            prep_time: number(recipe.prep_time),
            cook_time: number(recipe.cook_time),
            servings: number(recipe.servings),
            difficulty: text(&recipe.difficulty),
            category: text(&recipe.category),
            tags: text(&recipe.tags),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Ingredients => &self.ingredients,
            FormField::Instructions => &self.instructions,
            FormField::PrepTime => &self.prep_time,
            FormField::CookTime => &self.cook_time,
            FormField::Servings => &self.servings,
            FormField::Difficulty => &self.difficulty,
            FormField::Category => &self.category,
            FormField::Tags => &self.tags,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Ingredients => &mut self.ingredients,
            FormField::Instructions => &mut self.instructions,
            FormField::PrepTime => &mut self.prep_time,
            FormField::CookTime => &mut self.cook_time,
            FormField::Servings => &mut self.servings,
            FormField::Difficulty => &mut self.difficulty,
            FormField::Category => &mut self.category,
            FormField::Tags => &mut self.tags,
        };
        *slot = value;
    }
}

/// Validate the whole form and map it to the request payload
pub fn build_payload(form: &RecipeForm) -> Result<RecipePayload, ValidationErrors> {
    let errors: Vec<FieldError> = FormField::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, form.get(field))
                .err()
                .map(|message| FieldError { field, message })
        })
        .collect();
    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    // Rules passed, so numeric fields parse
    let number = |field: FormField| parse_positive(form.get(field).trim()).ok().flatten();
    let text = |field: FormField| {
        let value = form.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    Ok(RecipePayload {
        name: form.name.trim().to_string(),
        description: text(FormField::Description),
        ingredients: form.ingredients.trim().to_string(),
        instructions: form.instructions.trim().to_string(),
        prep_time: number(FormField::PrepTime),
        cook_time: number(FormField::CookTime),
        servings: number(FormField::Servings),
        difficulty: text(FormField::Difficulty),
        category: text(FormField::Category),
        tags: text(FormField::Tags),
    })
}
