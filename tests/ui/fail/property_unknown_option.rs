use traitdata::traitdef;

#[traitdef(id = "test:Clip")]
pub struct ClipTrait {
    #[property(name = "clipName")]
    clip_name: String,
}

fn main() {}
