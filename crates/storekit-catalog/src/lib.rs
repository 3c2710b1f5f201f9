pub mod resolver;

pub use resolver::{
    annotate_options, resolve, resolve_for_page, AnnotatedOption, OptionValueState,
    ResolvedVariant,
};
