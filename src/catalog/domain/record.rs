use super::column_catalog::ColumnCatalog;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A flat, string-valued record returned by one of the catalog endpoints
///
/// The service encodes booleans, dates and scores as strings and the client
/// does not coerce them. Fields missing from a JSON object decode to `""`.
pub trait Record: DeserializeOwned {
    /// The projectable columns of this schema, in default output order
    fn catalog() -> &'static ColumnCatalog;

    /// Looks up a projectable field by its lower-case identifier
    fn field(&self, identifier: &str) -> Option<&str>;
}

macro_rules! record_schema {
    (
        $(#[$meta:meta])*
        $name:ident => $catalog:ident {
            $($field:ident),+ $(,)?
        }
        $(extra { $($extra:ident),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(pub $field: String,)+
            $($(pub $extra: String,)*)?
        }

        static $catalog: Lazy<ColumnCatalog> =
            Lazy::new(|| ColumnCatalog::new(&[$(stringify!($field)),+]));

        impl Record for $name {
            fn catalog() -> &'static ColumnCatalog {
                &$catalog
            }

            fn field(&self, identifier: &str) -> Option<&str> {
                $(
                    if identifier == stringify!($field) {
                        return Some(self.$field.as_str());
                    }
                )+
                None
            }
        }
    };
}

record_schema! {
    /// Software update entry (`/update`)
    Update => UPDATE_COLUMNS {
        update_uid,
        kb,
        update_title,
        update_creation_date,
        product_title,
        product_family_title,
        update_type,
        is_superseded,
        classification_title,
        company_title,
        description,
        install_behavior,
        is_beta,
        is_bundled,
        is_public,
        language,
        more_info_url,
        msrc_severity,
        publication_state,
        readiness,
        support_url,
        uninstall_behavior,
        uninstall_notes,
        update_revision,
    }
    extra { bundles, supersedes }
}

record_schema! {
    /// Update classification such as "Security Updates" (`/classification`)
    Classification => CLASSIFICATION_COLUMNS {
        classification_uid,
        classification_revision,
        classification_title,
    }
}

record_schema! {
    /// Product entry (`/product`)
    Product => PRODUCT_COLUMNS {
        product_uid,
        product_revision,
        product_title,
    }
}

record_schema! {
    /// Product family entry (`/productfamily`)
    ProductFamily => PRODUCT_FAMILY_COLUMNS {
        product_family_uid,
        product_family_revision,
        product_family_title,
    }
}

record_schema! {
    /// CVE fixed by an update (`/cve`)
    Cve => CVE_COLUMNS {
        cve,
        update_uid,
        kb,
        update_title,
        product_title,
        arch,
        msrc_severity,
        cvssv3_base_score,
        cvssv3_temporal_score,
        update_creation_date,
    }
}

record_schema! {
    /// Supersession link between two updates (`/supersede`)
    Supersede => SUPERSEDE_COLUMNS {
        update_uid,
        kb,
        update_title,
        superseded_by_update_uid,
        superseded_by_kb,
        superseded_by_update_title,
    }
}
