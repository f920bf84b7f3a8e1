// Grammar limits for the parser module
pub const ALLOWED_CHARACTERS: &str = "0123456789.+-*/()% ";
pub const MAX_NESTING_DEPTH: usize = 200;
pub const MAX_TREE_HEIGHT: usize = 1000;
