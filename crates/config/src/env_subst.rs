/// Replace `${ENV_VAR}` and `${ENV_VAR:-fallback}` placeholders in raw
/// config text.
///
/// Unset variables without a fallback are left as-is so the parser reports
/// them in context instead of silently producing an empty value.
pub fn substitute_env(input: &str) -> String {
    substitute_with(input, |name| std::env::var(name).ok())
}

pub(crate) fn substitute_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            // Unterminated, emit the remainder verbatim.
            out.push_str(&rest[start..]);
            return out;
        };

        let body = &after[..end];
        let (name, fallback) = match body.split_once(":-") {
            Some((name, fallback)) => (name, Some(fallback)),
            None => (body, None),
        };

        let placeholder = &rest[start..start + end + 3];
        let resolved = if name.is_empty() {
            None
        } else {
            lookup(name).or_else(|| fallback.map(str::to_owned))
        };
        out.push_str(resolved.as_deref().unwrap_or(placeholder));

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "GW_LIB_DIR" => Some("/opt/gateway/lib".into()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_var() {
        assert_eq!(
            substitute_with("dir = \"${GW_LIB_DIR}\"", lookup),
            "dir = \"/opt/gateway/lib\""
        );
    }

    #[test]
    fn leaves_unknown_var() {
        assert_eq!(substitute_with("${GW_UNSET}/x", lookup), "${GW_UNSET}/x");
    }

    #[test]
    fn uses_fallback_when_unset() {
        assert_eq!(substitute_with("${GW_UNSET:-gateway}", lookup), "gateway");
        assert_eq!(substitute_with("${GW_LIB_DIR:-/usr/lib}", lookup), "/opt/gateway/lib");
    }

    #[test]
    fn set_but_empty_wins_over_fallback() {
        assert_eq!(substitute_with("[${EMPTY:-x}]", lookup), "[]");
    }

    #[test]
    fn malformed_placeholders_are_literal() {
        assert_eq!(substitute_with("a ${GW_LIB_DIR", lookup), "a ${GW_LIB_DIR");
        assert_eq!(substitute_with("${}", lookup), "${}");
        assert_eq!(substitute_with("cost $5", lookup), "cost $5");
    }

    #[test]
    fn reads_process_environment() {
        let expected = std::env::var("PATH").unwrap_or_else(|_| "${PATH}".into());
        assert_eq!(substitute_env("${PATH}"), expected);
        assert_eq!(substitute_env("${GATEWAY_LAUNCHER_UNSET_VAR:-x}"), "x");
    }
}
