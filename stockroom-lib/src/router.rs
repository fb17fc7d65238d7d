//! Application routes
//!
//! Static mapping from URL paths to the screens of the application.

use crate::config::ResourceKind;

/// A screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    InventoryList,
    InventoryAdd,
    OrderManagement,
    CategoryBrowser,
    ManageCategories,
    ManageSubcategories,
    ManageGenders,
    ManageColors,
    ManageSizes,
    ManageStates,
    ManageOrderEmails,
}

impl View {
    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::InventoryList => "Inventory",
            Self::InventoryAdd => "Add to inventory",
            Self::OrderManagement => "Orders",
            Self::CategoryBrowser => "Categories",
            Self::ManageCategories => "Manage categories",
            Self::ManageSubcategories => "Manage subcategories",
            Self::ManageGenders => "Manage genders",
            Self::ManageColors => "Manage colors",
            Self::ManageSizes => "Manage sizes",
            Self::ManageStates => "Manage states",
            Self::ManageOrderEmails => "Manage order emails",
        }
    }

    /// The resource this screen lists and edits, if any.
    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            Self::Home | Self::About => None,
            Self::InventoryList | Self::InventoryAdd => Some(ResourceKind::Products),
            Self::OrderManagement => Some(ResourceKind::Orders),
            Self::CategoryBrowser | Self::ManageCategories => Some(ResourceKind::Categories),
            Self::ManageSubcategories => Some(ResourceKind::Subcategories),
            Self::ManageGenders => Some(ResourceKind::Genders),
            Self::ManageColors => Some(ResourceKind::Colors),
            Self::ManageSizes => Some(ResourceKind::Sizes),
            Self::ManageStates => Some(ResourceKind::States),
            Self::ManageOrderEmails => Some(ResourceKind::OrderEmails),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        view: View::Home,
    },
    Route {
        path: "/about",
        name: "about",
        view: View::About,
    },
    Route {
        path: "/inventario/listar",
        name: "inventario-listar",
        view: View::InventoryList,
    },
    Route {
        path: "/inventario/agregar",
        name: "inventario-agregar",
        view: View::InventoryAdd,
    },
    Route {
        path: "/inventario/pedidos",
        name: "inventario-pedidos",
        view: View::OrderManagement,
    },
    Route {
        path: "/categories",
        name: "categories",
        view: View::CategoryBrowser,
    },
    Route {
        path: "/gestion/categorias",
        name: "gestion-categorias",
        view: View::ManageCategories,
    },
    Route {
        path: "/gestion/subcategorias",
        name: "gestion-subcategorias",
        view: View::ManageSubcategories,
    },
    Route {
        path: "/gestion/generos",
        name: "gestion-generos",
        view: View::ManageGenders,
    },
    Route {
        path: "/gestion/colores",
        name: "gestion-colores",
        view: View::ManageColors,
    },
    Route {
        path: "/gestion/tallas",
        name: "gestion-tallas",
        view: View::ManageSizes,
    },
    Route {
        path: "/gestion/estados",
        name: "gestion-estados",
        view: View::ManageStates,
    },
    Route {
        path: "/gestion/correospedidos",
        name: "gestion-correospedidos",
        view: View::ManageOrderEmails,
    },
];

/// Path-to-view lookup.
#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [Route],
}

impl Router {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Finds the route for `path`.
    ///
    /// Query string, fragment and a trailing slash are ignored.
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        let router = Router::new();
        assert_eq!(router.resolve("/").unwrap().view, View::Home);
        assert_eq!(
            router.resolve("/gestion/tallas").unwrap().view,
            View::ManageSizes
        );
        assert!(router.resolve("/gestion").is_none());
        assert!(router.resolve("/gestion/tallas/3").is_none());
    }

    #[test]
    fn test_resolve_ignores_decoration() {
        let router = Router::new();
        assert_eq!(
            router.resolve("/inventario/listar/?page=2").unwrap().name,
            "inventario-listar"
        );
        assert_eq!(router.resolve("/about#team").unwrap().view, View::About);
        assert_eq!(router.resolve("").unwrap().view, View::Home);
    }

    #[test]
    fn test_by_name() {
        let router = Router::new();
        let route = router.by_name("gestion-correospedidos").unwrap();
        assert_eq!(route.path, "/gestion/correospedidos");
        assert_eq!(route.view.resource(), Some(ResourceKind::OrderEmails));
    }

    #[test]
    fn test_table_is_unique() {
        let routes = Router::new().routes();
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
        }
    }
}
