//! Route templates for span fields and metric labels.

/// Collapse slugs in a request path so labels stay bounded, e.g. `/products/{slug}`.
pub(super) fn route_template(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["healthcheck"] => "/healthcheck",
        ["practitioners"] => "/practitioners",
        ["products"] => "/products",
        ["practitioners", _] => "/practitioners/{slug}",
        ["products", _] => "/products/{slug}",
        ["availability"] => "/availability",
        ["booking", "dates"] => "/booking/dates",
        ["api", "checkout"] => "/api/checkout",
        ["api-doc", ..] => "/api-doc",
        ["docs", ..] => "/docs",
        _ => "unmatched",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_collapsed() {
        assert_eq!(route_template("/products/valerian-root-tincture"), "/products/{slug}");
        assert_eq!(route_template("/practitioners/hector/"), "/practitioners/{slug}");
    }

    #[test]
    fn fixed_routes_are_kept() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/booking/dates"), "/booking/dates");
        assert_eq!(route_template("/api/checkout"), "/api/checkout");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        assert_eq!(route_template("/wp-admin/setup.php"), "unmatched");
        assert_eq!(route_template("/products/a/b"), "unmatched");
    }
}
