/// Reduce raw `Set-Cookie` values to a `Cookie` request header.
///
/// Keeps the leading `name=value` of each value and drops attributes such as
/// `Path` or `HttpOnly`. Values without a `=` are ignored.
pub(super) fn cookie_pairs<S: AsRef<str>>(set_cookie: &[S]) -> String {
    set_cookie
        .iter()
        .filter_map(|raw| {
            let pair = raw.as_ref().split(';').next()?.trim();
            if pair.contains('=') && !pair.starts_with('=') {
                Some(pair)
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
