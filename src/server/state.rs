use crate::link::LinkExpander;

pub struct AppState {
    pub expander: LinkExpander,
}
