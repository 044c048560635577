//! Platform-independent model of the Spice Delights site: the product
//! catalog and its category filter, the reveal trigger, the contact form and
//! the rest of the site's static content.

pub mod catalog;
pub mod category;
pub mod config;
pub mod contact;
pub mod content;
pub mod product;
pub mod selection;
pub mod view_trigger;

pub use catalog::filter;
pub use catalog::Catalog;
pub use category::categories;
pub use category::Category;
pub use category::CategoryId;
pub use category::ProductCategory;
pub use config::ConfigError;
pub use config::SiteConfig;
pub use contact::ContactField;
pub use contact::ContactForm;
pub use contact::ContactFormError;
pub use contact::ContactSubmission;
pub use content::SiteContent;
pub use product::Product;
pub use product::ProductId;
pub use selection::CategorySelector;
pub use view_trigger::AnimationVariant;
pub use view_trigger::TriggerConfig;
pub use view_trigger::ViewTrigger;
pub use view_trigger::Visibility;
