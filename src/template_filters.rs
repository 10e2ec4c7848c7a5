//! Case conversion filters, handy for turning a project name into C identifiers
//! or CMake target names, e.g. `{{ name | shouty_snake_case }}_H`.

use heck::{ToKebabCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use liquid_core::{Filter, Result, Runtime, Value, ValueView};
use liquid_derive::{Display_filter, FilterReflection, ParseFilter};

fn input_string(input: &dyn ValueView) -> Result<String> {
    input
        .as_scalar()
        .map(|scalar| scalar.to_kstr().as_str().to_owned())
        .ok_or_else(|| liquid_core::Error::with_msg("String expected"))
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "snake_case",
    description = "Change text to snake_case.",
    parsed(SnakeCaseFilter)
)]
pub struct SnakeCaseFilterParser;

#[derive(Debug, Default, Display_filter)]
#[name = "snake_case"]
struct SnakeCaseFilter;

impl Filter for SnakeCaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(Value::scalar(input_string(input)?.to_snake_case()))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "kebab_case",
    description = "Change text to kebab-case.",
    parsed(KebabCaseFilter)
)]
pub struct KebabCaseFilterParser;

#[derive(Debug, Default, Display_filter)]
#[name = "kebab_case"]
struct KebabCaseFilter;

impl Filter for KebabCaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(Value::scalar(input_string(input)?.to_kebab_case()))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "shouty_snake_case",
    description = "Change text to SHOUTY_SNAKE_CASE.",
    parsed(ShoutySnakeCaseFilter)
)]
pub struct ShoutySnakeCaseFilterParser;

#[derive(Debug, Default, Display_filter)]
#[name = "shouty_snake_case"]
struct ShoutySnakeCaseFilter;

impl Filter for ShoutySnakeCaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(Value::scalar(input_string(input)?.to_shouty_snake_case()))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "upper_camel_case",
    description = "Change text to UpperCamelCase.",
    parsed(UpperCamelCaseFilter)
)]
pub struct UpperCamelCaseFilterParser;

#[derive(Debug, Default, Display_filter)]
#[name = "upper_camel_case"]
struct UpperCamelCaseFilter;

impl Filter for UpperCamelCaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(Value::scalar(input_string(input)?.to_upper_camel_case()))
    }
}
