#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static regex must compile"));
        &*RE
    }};
}

/// Build a [`TriggerRule`](crate::TriggerRule), returning `Result<TriggerRule>`.
///
/// ```
/// use symbex::trigger;
///
/// let half = trigger!("1/2" => "½").unwrap();
/// let smile = trigger!(":)" => "😀", immediate).unwrap();
/// let bold = trigger!("::b::" => "<b>b</b>", markup).unwrap();
/// assert!(bold.is_markup());
/// # let _ = (half, smile);
/// ```
#[macro_export]
macro_rules! trigger {
    ($key:expr => $val:expr) => {
        $crate::TriggerRule::new($key, $val, $crate::TriggerPolicy::OnWhitespaceBoundary)
    };
    ($key:expr => $val:expr, immediate) => {
        $crate::TriggerRule::new($key, $val, $crate::TriggerPolicy::Immediate)
    };
    ($key:expr => $val:expr, markup) => {
        $crate::TriggerRule::new($key, $val, $crate::TriggerPolicy::Immediate).map(|r| r.with_markup(true))
    };
}
