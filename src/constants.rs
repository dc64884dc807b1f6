// Constants used in the project. These are "convention over configuration" for now.

pub const DATABASE_SUFFIX: &str = ".sqlite";
