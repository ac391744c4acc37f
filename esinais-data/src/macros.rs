/// Builder-style setters for `String` fields of a draft.
macro_rules! string_setters {
    ($($field:ident),+ $(,)?) => {
        $(
            pub fn $field(mut self, $field: impl Into<String>) -> Self {
                self.$field = $field.into();
                self
            }
        )+
    };
}

pub(crate) use string_setters;
