use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::customer::CustomerStore;
use crate::validation::store::{PatternRecord, PatternStore};

/// Default validation expressions registered at startup.
static DEFAULT_EXPRESSIONS: Lazy<[PatternRecord; 3]> = Lazy::new(|| {
    [
        PatternRecord {
            expression_type: "email".to_string(),
            pattern: r"[a-z0-9!#$%&*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?".to_string(),
        },
        PatternRecord {
            expression_type: "phone".to_string(),
            pattern: r"^([0-9]( |-)?)?(\(?[0-9]{3}\)?|[0-9]{3})( |-)?([0-9]{3}( |-)?[0-9]{4}|[a-zA-Z0-9]{7})$".to_string(),
        },
        PatternRecord {
            expression_type: "website".to_string(),
            pattern: r"^(http:\/\/www\.|https:\/\/www\.|http:\/\/|https:\/\/)?[a-z0-9]+([\-\.]{1}[a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(\/.*)?$".to_string(),
        },
    ]
});

/// Contact info of the customer record seeded alongside the patterns.
const SEED_CUSTOMER_CONTACT_INFO: &str = "mhussainshah79@hotmail.com";

/// Loads the default validation expressions into the store.
pub fn load_default_expressions(store: &PatternStore) {
    for record in DEFAULT_EXPRESSIONS.iter() {
        debug!("Seeding validation pattern: {}", record.expression_type);
        store.put(&record.expression_type, &record.pattern);
    }
    info!("Seeded {} validation patterns", DEFAULT_EXPRESSIONS.len());
}

/// Stores the seed customer record.
pub fn load_seed_customers(customers: &CustomerStore) {
    let customer = customers.save(SEED_CUSTOMER_CONTACT_INFO);
    info!("Seeded customer record with id: {}", customer.id);
}
