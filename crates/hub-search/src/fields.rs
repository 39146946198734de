// SPDX-License-Identifier: Apache-2.0

/// How the query-string serializer treats a recognized search param.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain value, percent-encoded in place.
    Simple,
    /// Match param, emitted as a `catalog[...]` or `filter[...]` segment.
    Filter,
    /// Match param over dates; `between` clauses parse terms as dates.
    DateFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// Catalog-definition params pin which catalog is searched and are
    /// emitted under `catalog[...]` rather than `filter[...]`.
    pub catalog_definition: bool,
}

const fn simple(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Simple,
        catalog_definition: false,
    }
}

const fn catalog(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Filter,
        catalog_definition: true,
    }
}

const fn filter(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Filter,
        catalog_definition: false,
    }
}

const fn date_filter(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::DateFilter,
        catalog_definition: false,
    }
}

/// Recognized search params in emission order. Catalog segments and filter
/// segments each follow this order regardless of the order params arrive
/// in, which keeps serialized query strings stable.
pub const PARAM_SCHEMA: &[ParamSpec] = &[
    simple("q"),
    simple("sort"),
    simple("fields"),
    simple("bbox"),
    simple("agg"),
    simple("page"),
    catalog("groupIds"),
    catalog("orgId"),
    catalog("initiativeId"),
    catalog("id"),
    filter("access"),
    filter("collection"),
    filter("hubType"),
    filter("source"),
    filter("tags"),
    filter("owner"),
    filter("hasApi"),
    filter("downloadable"),
    date_filter("modified"),
];

#[must_use]
pub fn lookup_param(name: &str) -> Option<&'static ParamSpec> {
    PARAM_SCHEMA.iter().find(|spec| spec.name == name)
}

/// True for params that serialize as `catalog[...]`/`filter[...]` segments.
#[must_use]
pub fn is_filterable(name: &str) -> bool {
    lookup_param(name).map_or(false, |spec| spec.kind != ParamKind::Simple)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_definition_params_are_exactly_the_four() {
        let catalog_names: Vec<&str> = PARAM_SCHEMA
            .iter()
            .filter(|spec| spec.catalog_definition)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(catalog_names, ["groupIds", "orgId", "initiativeId", "id"]);
    }

    #[test]
    fn lookup_distinguishes_simple_from_filterable() {
        assert!(!is_filterable("q"));
        assert!(!is_filterable("unknownParam"));
        assert!(is_filterable("tags"));
        assert_eq!(
            lookup_param("modified").map(|spec| spec.kind),
            Some(ParamKind::DateFilter)
        );
    }
}
