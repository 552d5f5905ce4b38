// ============================================================================
// ROUTER - Hash-based page selection and role guard
// ============================================================================

use crate::models::Role;

/// Every screen the client can show. Closed set; rendering matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Search,
    Book { route_id: i64 },
    MyBookings,
    MyTicket,
    Profile,
    AdminStats,
    AdminBookings,
    AdminAddRoute,
}

impl Page {
    /// Parse a location hash ("#/my-bookings"). Anything unrecognised lands
    /// on Home, matching the catch-all route of the original client.
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#');
        let mut parts = path.split('/').filter(|s| !s.is_empty());
        match parts.next() {
            None => Page::Home,
            Some("login") => Page::Login,
            Some("register") => Page::Register,
            Some("search") => Page::Search,
            Some("book") => match parts.next().and_then(|id| id.parse::<i64>().ok()) {
                Some(route_id) => Page::Book { route_id },
                None => Page::Home,
            },
            Some("my-bookings") => Page::MyBookings,
            Some("my-ticket") => Page::MyTicket,
            Some("profile") => Page::Profile,
            // Legacy entry point kept as an alias.
            Some("admin-login") => Page::Login,
            Some("admin") => match parts.next() {
                Some("bookings") => Page::AdminBookings,
                Some("add-route") => Page::AdminAddRoute,
                _ => Page::AdminStats,
            },
            Some(_) => Page::Home,
        }
    }

    pub fn hash(&self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::Login => "#/login".to_string(),
            Page::Register => "#/register".to_string(),
            Page::Search => "#/search".to_string(),
            Page::Book { route_id } => format!("#/book/{route_id}"),
            Page::MyBookings => "#/my-bookings".to_string(),
            Page::MyTicket => "#/my-ticket".to_string(),
            Page::Profile => "#/profile".to_string(),
            Page::AdminStats => "#/admin".to_string(),
            Page::AdminBookings => "#/admin/bookings".to_string(),
            Page::AdminAddRoute => "#/admin/add-route".to_string(),
        }
    }

    /// Who may see this page. GUEST is only listed where the page is public.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Page::Home | Page::Login | Page::Register | Page::Search => {
                &[Role::Guest, Role::Passenger, Role::Admin]
            }
            Page::Book { .. } | Page::MyBookings | Page::MyTicket => &[Role::Passenger],
            Page::Profile => &[Role::Passenger, Role::Admin],
            Page::AdminStats | Page::AdminBookings | Page::AdminAddRoute => &[Role::Admin],
        }
    }

    /// Admin pages render inside the sidebar shell instead of the navbar
    /// layout.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Page::AdminStats | Page::AdminBookings | Page::AdminAddRoute
        )
    }

    /// Heading shown in the admin shell header.
    pub fn admin_title(&self) -> &'static str {
        match self {
            Page::AdminAddRoute => "Add Route",
            Page::AdminBookings => "All Bookings",
            _ => "Statistics Overview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(Page),
}

/// Decide render vs redirect for a requested page and the current role.
/// Unauthorized requests go to Login; an admin asking for the public home
/// is sent to the dashboard instead.
pub fn resolve(page: Page, role: Role) -> Resolution {
    if !page.allowed_roles().contains(&role) {
        return Resolution::Redirect(Page::Login);
    }
    if page == Page::Home && role == Role::Admin {
        return Resolution::Redirect(Page::AdminStats);
    }
    Resolution::Render(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_on_passenger_page_redirects_to_login() {
        assert_eq!(
            resolve(Page::MyBookings, Role::Guest),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn admin_is_not_implicitly_a_passenger() {
        assert_eq!(
            resolve(Page::MyBookings, Role::Admin),
            Resolution::Redirect(Page::Login)
        );
        assert_eq!(
            resolve(Page::Book { route_id: 1 }, Role::Admin),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn passenger_cannot_reach_admin_pages() {
        assert_eq!(
            resolve(Page::AdminStats, Role::Passenger),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn profile_allows_both_logged_in_roles_only() {
        assert_eq!(
            resolve(Page::Profile, Role::Passenger),
            Resolution::Render(Page::Profile)
        );
        assert_eq!(
            resolve(Page::Profile, Role::Admin),
            Resolution::Render(Page::Profile)
        );
        assert_eq!(
            resolve(Page::Profile, Role::Guest),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn admin_home_lands_on_dashboard() {
        assert_eq!(
            resolve(Page::Home, Role::Admin),
            Resolution::Redirect(Page::AdminStats)
        );
        assert_eq!(resolve(Page::Home, Role::Guest), Resolution::Render(Page::Home));
    }

    #[test]
    fn known_hashes_round_trip() {
        let pages = [
            Page::Home,
            Page::Login,
            Page::Register,
            Page::Search,
            Page::Book { route_id: 42 },
            Page::MyBookings,
            Page::MyTicket,
            Page::Profile,
            Page::AdminStats,
            Page::AdminBookings,
            Page::AdminAddRoute,
        ];
        for page in pages {
            assert_eq!(Page::from_hash(&page.hash()), page);
        }
    }

    #[test]
    fn unknown_or_malformed_hashes_fall_back_to_home() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/nope"), Page::Home);
        assert_eq!(Page::from_hash("#/book/abc"), Page::Home);
        assert_eq!(Page::from_hash("#/admin-login"), Page::Login);
        assert_eq!(Page::from_hash("#/admin/unknown"), Page::AdminStats);
    }
}
