mod common;
mod evaluators;
mod profile;
