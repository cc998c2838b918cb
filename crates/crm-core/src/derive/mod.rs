//! Derived Fields
//!
//! Pure record → presentation helpers. These encode business rules shared
//! with the backend (e.g. `isStale=true`), not styling choices.

mod stale;
mod badges;
mod messaging;
mod dates;
mod performance;

pub use stale::{is_stale, CLOSED_STATUSES, STALE_AFTER_DAYS};
pub use badges::{
    activity_action_badge, customer_status_badge, label_for, lead_source_label, listing_status_badge,
    listing_type_badge, property_status_badge, Badge, BadgeDef, ACTIVITY_ACTIONS, CUSTOMER_STATUSES,
    LEAD_SOURCES, LISTING_STATUSES, LISTING_TYPES, NEUTRAL_BADGE, PROPERTY_STATUSES,
};
pub use messaging::{whatsapp_link, whatsapp_message, whatsapp_number, COUNTRY_CODE};
pub use dates::{
    date_input_value, format_tr_date, format_tr_datetime, format_tr_long_date, one_week_later,
    parse_timestamp, reminder_tone, ReminderTone,
};
pub use performance::{conversion_rate_class, PerformanceSummary};
