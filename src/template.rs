use liquid::model::KString;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};
use log::{debug, warn};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::CreatorError;
use crate::features::Features;
use crate::template_filters::*;

/// Extension of the template for an output file, `main.c` is read from `main.c.liquid`.
pub const TEMPLATE_EXTENSION: &str = "liquid";

/// Feature switches a template can be given on top of `name` and `projectPath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    NoRtos,
    Trace,
    Psram,
}

impl Variable {
    pub fn key(self) -> &'static str {
        match self {
            Variable::NoRtos => "noRTOS",
            Variable::Trace => "trace",
            Variable::Psram => "psram",
        }
    }

    fn value(self, features: &Features) -> bool {
        match self {
            Variable::NoRtos => features.no_rtos(),
            Variable::Trace => features.trace_enabled(),
            Variable::Psram => features.trace_psram(),
        }
    }
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .filter(KebabCaseFilterParser)
        .filter(ShoutySnakeCaseFilterParser)
        .filter(SnakeCaseFilterParser)
        .filter(UpperCamelCaseFilterParser)
        .build()
        .expect("can't fail due to no partials support")
}

/// Create the liquid object for one template, holding only the variables that
/// template is meant to see.
pub fn create_liquid_object(
    name: &str,
    project_path: &Path,
    features: &Features,
    variables: &[Variable],
) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert("name".into(), Value::scalar(name.to_owned()));
    liquid_object.insert(
        "projectPath".into(),
        Value::scalar(project_path.display().to_string()),
    );
    for variable in variables {
        liquid_object.insert(variable.key().into(), Value::scalar(variable.value(features)));
    }
    liquid_object
}

/// Folder the templates are loaded from.
#[derive(Debug, Clone)]
pub struct TemplateDir(PathBuf);

impl TemplateDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.0.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    fn load(&self, name: &str) -> Result<String, CreatorError> {
        let path = self.template_path(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CreatorError::TemplateNotFound {
                name: name.to_string(),
                path,
            }),
            Err(e) => Err(CreatorError::io(path, e)),
        }
    }
}

/// Render template `name` with `context` and write the result to `output`,
/// replacing whatever is there.
pub fn render_and_write(
    parser: &Parser,
    templates: &TemplateDir,
    name: &str,
    context: &mut Object,
    output: &Path,
) -> Result<(), CreatorError> {
    let content = templates.load(name)?;
    let rendered =
        render_string_gracefully(context, parser, &content).map_err(|source| {
            CreatorError::Template {
                name: name.to_string(),
                source,
            }
        })?;
    fs::write(output, rendered).map_err(|e| CreatorError::io(output, e))?;
    debug!("Rendered {name} into {}", output.display());
    Ok(())
}

/// Render `content`; a variable the template asks for but the context lacks is
/// nil, so it renders empty and is false in conditions.
pub fn render_string_gracefully(
    context: &mut Object,
    parser: &Parser,
    content: &str,
) -> Result<String, liquid::Error> {
    let template = parser.parse(content)?;
    loop {
        match template.render(&*context) {
            Ok(rendered) => return Ok(rendered),
            Err(e) => {
                let missing = missing_variable(&e.to_string())
                    .filter(|var| !context.contains_key(var.as_str()));
                match missing {
                    Some(var) => {
                        warn!("Template variable `{var}` is not defined, rendering it empty");
                        context.insert(KString::from(var), Value::Nil);
                    }
                    None => return Err(e),
                }
            }
        }
    }
}

fn missing_variable(msg: &str) -> Option<String> {
    let requested_var = regex::Regex::new(r"requested\svariable=(?P<v>\S+)").ok()?;
    requested_var
        .captures(msg)
        .and_then(|captures| captures.name("v"))
        .map(|var| var.as_str().to_string())
}
