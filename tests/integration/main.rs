
mod validation;
