use traitdata::traitdef;

#[traitdef(id = "")]
pub struct EmptyIdTrait;

fn main() {}
