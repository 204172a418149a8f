//! Static catalogue of the remote endpoints.
//!
//! | Name | Method | Path | Auth | Success required |
//! |------|--------|------|------|------------------|
//! | `version` | GET | `version` | no | no |
//! | `check_health` | GET | `health` | yes | no |
//! | `get_info` | GET | `app/info` | yes | yes |
//! | `send_transfer` | POST | `app/transfer` | yes | yes |
//! | `create_withdrawal` | POST | `app/withdrawal` | yes | yes |
//! | `get_withdrawal` | GET | `app/withdrawal/status/{id}` | yes | yes |
//! | `get_withdrawal_fees` | GET | `app/withdrawal/fees` | yes | yes |
//! | `create_multi_cheque` | POST | `multi-cheque` | yes | yes |
//! | `get_multi_cheques` | GET | `multi-cheque` | yes | yes |
//! | `get_multi_cheque` | GET | `multi-cheque/{id}` | yes | yes |
//! | `edit_multi_cheque` | PUT | `multi-cheque/{id}` | yes | yes |
//! | `delete_multi_cheque` | DELETE | `multi-cheque/{id}` | yes | yes |
//! | `create_invoice` | POST | `tg-invoices` | yes | yes |
//! | `get_invoices` | GET | `tg-invoices` | yes | yes |
//! | `get_invoice` | GET | `tg-invoices/{id}` | yes | yes |
//! | `delete_invoice` | DELETE | `tg-invoices/{id}` | yes | yes |
//! | `get_available_currencies` | GET | `currencies/available` | no | yes |
//! | `get_withdrawal_link` | GET | `withdrawal-link` | yes | yes |

use reqwest::Method;

use crate::http::RequestOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    /// Path relative to the base URL; `{id}` is substituted by [`Endpoint::resolve`].
    pub path: &'static str,
    pub require_auth: bool,
    pub require_success: bool,
}

impl Endpoint {
    const fn new(name: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            require_auth: true,
            require_success: true,
        }
    }

    const fn public(mut self) -> Self {
        self.require_auth = false;
        self
    }

    const fn lenient(mut self) -> Self {
        self.require_success = false;
        self
    }

    /// The concrete path with `{id}` replaced by `id`.
    pub fn resolve(&self, id: impl std::fmt::Display) -> String {
        self.path.replace("{id}", &id.to_string())
    }

    /// Request options carrying this endpoint's auth and success flags.
    pub fn options(&self) -> RequestOptions {
        RequestOptions::new()
            .require_auth(self.require_auth)
            .require_success(self.require_success)
    }
}

pub const VERSION: Endpoint = Endpoint::new("version", Method::GET, "version").public().lenient();
pub const CHECK_HEALTH: Endpoint = Endpoint::new("check_health", Method::GET, "health").lenient();
pub const GET_INFO: Endpoint = Endpoint::new("get_info", Method::GET, "app/info");
pub const SEND_TRANSFER: Endpoint = Endpoint::new("send_transfer", Method::POST, "app/transfer");
pub const CREATE_WITHDRAWAL: Endpoint = Endpoint::new("create_withdrawal", Method::POST, "app/withdrawal");
pub const GET_WITHDRAWAL: Endpoint = Endpoint::new("get_withdrawal", Method::GET, "app/withdrawal/status/{id}");
pub const GET_WITHDRAWAL_FEES: Endpoint = Endpoint::new("get_withdrawal_fees", Method::GET, "app/withdrawal/fees");
pub const CREATE_MULTI_CHEQUE: Endpoint = Endpoint::new("create_multi_cheque", Method::POST, "multi-cheque");
pub const GET_MULTI_CHEQUES: Endpoint = Endpoint::new("get_multi_cheques", Method::GET, "multi-cheque");
pub const GET_MULTI_CHEQUE: Endpoint = Endpoint::new("get_multi_cheque", Method::GET, "multi-cheque/{id}");
pub const EDIT_MULTI_CHEQUE: Endpoint = Endpoint::new("edit_multi_cheque", Method::PUT, "multi-cheque/{id}");
pub const DELETE_MULTI_CHEQUE: Endpoint = Endpoint::new("delete_multi_cheque", Method::DELETE, "multi-cheque/{id}");
pub const CREATE_INVOICE: Endpoint = Endpoint::new("create_invoice", Method::POST, "tg-invoices");
pub const GET_INVOICES: Endpoint = Endpoint::new("get_invoices", Method::GET, "tg-invoices");
pub const GET_INVOICE: Endpoint = Endpoint::new("get_invoice", Method::GET, "tg-invoices/{id}");
pub const DELETE_INVOICE: Endpoint = Endpoint::new("delete_invoice", Method::DELETE, "tg-invoices/{id}");
pub const GET_AVAILABLE_CURRENCIES: Endpoint =
    Endpoint::new("get_available_currencies", Method::GET, "currencies/available").public();
pub const GET_WITHDRAWAL_LINK: Endpoint = Endpoint::new("get_withdrawal_link", Method::GET, "withdrawal-link");

/// Every endpoint the client calls.
pub static CATALOGUE: [Endpoint; 18] = [
    VERSION,
    CHECK_HEALTH,
    GET_INFO,
    SEND_TRANSFER,
    CREATE_WITHDRAWAL,
    GET_WITHDRAWAL,
    GET_WITHDRAWAL_FEES,
    CREATE_MULTI_CHEQUE,
    GET_MULTI_CHEQUES,
    GET_MULTI_CHEQUE,
    EDIT_MULTI_CHEQUE,
    DELETE_MULTI_CHEQUE,
    CREATE_INVOICE,
    GET_INVOICES,
    GET_INVOICE,
    DELETE_INVOICE,
    GET_AVAILABLE_CURRENCIES,
    GET_WITHDRAWAL_LINK,
];

pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    CATALOGUE.iter().find(|e| e.name == name)
}
