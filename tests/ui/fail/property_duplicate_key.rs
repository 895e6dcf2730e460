use traitdata::traitdef;

#[traitdef(id = "test:Shared")]
pub struct SharedKeyTrait {
    #[property(key = "k")]
    a: i64,
    #[property(key = "k")]
    b: String,
}

fn main() {}
