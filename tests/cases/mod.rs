use polcalc::CompileErrorKind;

/// Compile `input`, bind it to `vars` and evaluate once.
///
/// Errors are flattened to `(kind, position)` so expectations stay one line.
pub fn run(input: &str, vars: &[f64]) -> Result<f64, (CompileErrorKind, usize)> {
    polcalc::build(input, |i| vars[i])
        .map(|calc| calc.evaluate())
        .map_err(|err| (err.kind, err.position))
}

/// Canonical prefix form of `input`, panicking if it does not compile.
pub fn format(input: &str) -> String {
    polcalc::compile(input)
        .unwrap_or_else(|err| panic!("{input:?}: {err}"))
        .to_string()
}

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        $(vars: [$($var:expr),* $(,)?],)?
        result: $result:expr
        $(, formatted: $formatted:expr)?
        $(,)?
    ) => {
        #[test]
        fn $name() {
            let vars: &[f64] = &[$($($var),*)?];
            pretty_assertions::assert_eq!($crate::cases::run($input, vars), $result);
            $(
                pretty_assertions::assert_eq!($crate::cases::format($input), $formatted);
            )?
        }
    };
}
