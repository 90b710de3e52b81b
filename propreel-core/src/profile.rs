//! Profile Screen State
//!
//! Owns the active section tab, the active category filter, and the three
//! static listing arrays they select over. Both filters are pure views over
//! the fixture data; nothing here mutates a listing.

use tracing::debug;

use crate::fixtures;
use crate::models::{AgentProfile, Listing, ListingCategory};

/// Section tabs on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    Listings,
    Saved,
    Sold,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 3] = [
        ProfileSection::Listings,
        ProfileSection::Saved,
        ProfileSection::Sold,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileSection::Listings => "My Listings",
            ProfileSection::Saved => "Saved",
            ProfileSection::Sold => "Sold",
        }
    }
}

/// Category filter over a listing section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ListingCategory),
}

impl CategoryFilter {
    /// Filter chips in display order
    pub const CHIPS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(ListingCategory::Apartments),
        CategoryFilter::Only(ListingCategory::Villas),
        CategoryFilter::Only(ListingCategory::Penthouses),
        CategoryFilter::Only(ListingCategory::Townhouses),
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Properties",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }
}

/// State for the listing browser screen
#[derive(Debug, Clone)]
pub struct ProfileState {
    agent: AgentProfile,
    section: ProfileSection,
    category: CategoryFilter,
    listings: Vec<Listing>,
    saved: Vec<Listing>,
    sold: Vec<Listing>,
}

impl ProfileState {
    /// Fresh state from the bundled fixtures
    pub fn new() -> Self {
        Self {
            agent: fixtures::agent_profile(),
            section: ProfileSection::Listings,
            category: CategoryFilter::All,
            listings: fixtures::my_listings(),
            saved: fixtures::saved_properties(),
            sold: fixtures::sold_properties(),
        }
    }

    pub fn agent(&self) -> &AgentProfile {
        &self.agent
    }

    pub fn section(&self) -> ProfileSection {
        self.section
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn set_section(&mut self, section: ProfileSection) {
        self.section = section;
        debug!("Profile section set to {}", section.title());
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        debug!("Profile category set to {}", category.display_name());
    }

    /// Base array for the active section
    fn section_listings(&self) -> &[Listing] {
        match self.section {
            ProfileSection::Listings => &self.listings,
            ProfileSection::Saved => &self.saved,
            ProfileSection::Sold => &self.sold,
        }
    }

    /// Listings for the active section, narrowed by the active category
    ///
    /// Preserves fixture order; an empty result is a valid empty view, not
    /// an error.
    pub fn visible_listings(&self) -> Vec<&Listing> {
        let base = self.section_listings();
        match self.category {
            CategoryFilter::All => base.iter().collect(),
            CategoryFilter::Only(category) => {
                base.iter().filter(|l| l.category == category).collect()
            }
        }
    }

    /// Featured spotlight over the agent's own listings
    ///
    /// Independent of the active section and category filter; the spotlight
    /// always reflects every featured own listing.
    pub fn featured_listings(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.featured).collect()
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.title.clone()).collect()
    }

    #[test]
    fn test_all_category_returns_full_section() {
        let profile = ProfileState::new();
        assert_eq!(profile.visible_listings().len(), 4);

        let mut profile = profile;
        profile.set_section(ProfileSection::Saved);
        assert_eq!(profile.visible_listings().len(), 2);

        profile.set_section(ProfileSection::Sold);
        assert_eq!(profile.visible_listings().len(), 2);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let mut profile = ProfileState::new();
        profile.set_category(CategoryFilter::Only(ListingCategory::Apartments));

        assert_eq!(
            titles(&profile.visible_listings()),
            vec!["Modern Apartment".to_string(), "Studio Apartment".to_string()]
        );
    }

    #[test]
    fn test_category_with_no_match_yields_empty_view() {
        let mut profile = ProfileState::new();
        profile.set_section(ProfileSection::Saved);
        profile.set_category(CategoryFilter::Only(ListingCategory::Villas));

        assert!(profile.visible_listings().is_empty());
    }

    #[test]
    fn test_sold_section_filtering() {
        let mut profile = ProfileState::new();
        profile.set_section(ProfileSection::Sold);
        profile.set_category(CategoryFilter::Only(ListingCategory::Townhouses));

        assert_eq!(
            titles(&profile.visible_listings()),
            vec!["Corner Townhouse".to_string()]
        );
    }

    #[test]
    fn test_featured_spotlight_ignores_filters() {
        let mut profile = ProfileState::new();
        let expected = vec!["Modern Apartment".to_string(), "Luxury Villa".to_string()];
        assert_eq!(titles(&profile.featured_listings()), expected);

        // Narrowing the list view leaves the spotlight untouched
        profile.set_category(CategoryFilter::Only(ListingCategory::Penthouses));
        assert_eq!(titles(&profile.featured_listings()), expected);

        profile.set_section(ProfileSection::Sold);
        assert_eq!(titles(&profile.featured_listings()), expected);
    }
}
