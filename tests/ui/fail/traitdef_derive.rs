use traitdata::traitdef;

#[traitdef(id = "test:Derived")]
#[derive(Debug)]
pub struct DerivedTrait;

fn main() {}
