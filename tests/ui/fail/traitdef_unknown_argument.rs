use traitdata::traitdef;

#[traitdef(id = "test:A", name = "A")]
pub struct ATrait;

fn main() {}
