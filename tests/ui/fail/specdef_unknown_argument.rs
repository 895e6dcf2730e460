use traitdata::specdef;

#[specdef(traits = "x")]
pub struct UnknownArgSpecification;

fn main() {}
