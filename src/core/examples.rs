//! Sample texts for trying the analyzer.

pub const EXAMPLE_TEXTS: &[&str] = &[
    "The female nurse assisted the male doctor with the surgery.",
    "He is an excellent engineer, while she makes a great secretary.",
    "The inner-city youth were suspected of the crime.",
];
