//! Schema declaration: named collections with secondary indexes.
//!
//! A schema is declared up front and handed to [`Store::open`]; opening the
//! store performs the setup idempotently. The declarations below are the
//! crate's compatibility surface: the collection names, indexed fields, and
//! uniqueness constraints the repositories rely on.
//!
//! [`Store::open`]: crate::store::Store::open

/// A secondary index over one field of a collection's records.
///
/// The index name is what callers pass to `get_by_index`; the field is the
/// top-level camelCase document key the index covers. A unique index still
/// answers lookups with a list, conventionally of length zero or one.
#[derive(Debug, Clone, Copy)]
pub struct IndexSpec {
    pub name: &'static str,
    pub field: &'static str,
    pub unique: bool,
}

/// A named collection keyed by a string primary key.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub indexes: &'static [IndexSpec],
}

impl CollectionSpec {
    pub(crate) fn index(&self, name: &str) -> Option<&IndexSpec> {
        self.indexes.iter().find(|idx| idx.name == name)
    }
}

/// The full set of collections a store manages.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub collections: &'static [CollectionSpec],
}

impl Schema {
    pub(crate) fn collection(&self, name: &str) -> Option<&CollectionSpec> {
        self.collections.iter().find(|c| c.name == name)
    }
}

/// Collection names used by the repositories.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EVENTS: &str = "events";
    pub const BOOKINGS: &str = "bookings";
    pub const VENDORS: &str = "vendors";
    pub const BUDGET_CATEGORIES: &str = "budgetCategories";
    pub const TRANSACTIONS: &str = "transactions";
    pub const GUESTS: &str = "guests";
    pub const MESSAGES: &str = "messages";
}

const fn index(name: &'static str, field: &'static str) -> IndexSpec {
    IndexSpec {
        name,
        field,
        unique: false,
    }
}

const fn unique_index(name: &'static str, field: &'static str) -> IndexSpec {
    IndexSpec {
        name,
        field,
        unique: true,
    }
}

/// The event-planner schema: every collection and secondary index the
/// repositories in [`crate::db`] query through.
#[must_use]
pub const fn planner_schema() -> Schema {
    Schema {
        collections: PLANNER_COLLECTIONS,
    }
}

const PLANNER_COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: collections::USERS,
        indexes: &[unique_index("email", "email"), index("role", "role")],
    },
    CollectionSpec {
        name: collections::EVENTS,
        indexes: &[
            index("userId", "userId"),
            index("status", "status"),
            index("date", "date"),
        ],
    },
    CollectionSpec {
        name: collections::BOOKINGS,
        indexes: &[index("eventId", "eventId"), index("status", "status")],
    },
    CollectionSpec {
        name: collections::VENDORS,
        indexes: &[
            unique_index("userId", "userId"),
            index("location", "location"),
        ],
    },
    CollectionSpec {
        name: collections::BUDGET_CATEGORIES,
        indexes: &[index("eventId", "eventId")],
    },
    CollectionSpec {
        name: collections::TRANSACTIONS,
        indexes: &[
            index("eventId", "eventId"),
            index("budgetCategoryId", "budgetCategoryId"),
            index("vendorId", "vendorId"),
        ],
    },
    CollectionSpec {
        name: collections::GUESTS,
        indexes: &[
            index("eventId", "eventId"),
            index("rsvpStatus", "rsvpStatus"),
        ],
    },
    CollectionSpec {
        name: collections::MESSAGES,
        indexes: &[
            index("senderId", "senderId"),
            index("receiverId", "receiverId"),
            index("eventId", "eventId"),
        ],
    },
];
