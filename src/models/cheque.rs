use serde::{Deserialize, Serialize};

use super::FromApi;
use super::enums::ChequeState;

/// A multi-cheque.
///
/// `share_per_user` is computed on decode as `total / users` (0 when
/// `users` is 0); it is never read from the remote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChequeWire", rename_all = "camelCase")]
pub struct Cheque {
    pub id: u64,
    pub currency: String,
    /// Amount charged from the balance for the whole cheque.
    pub total: f64,
    pub per_user: f64,
    /// Number of users that can activate the cheque.
    pub users: u64,
    pub password: Option<String>,
    pub description: Option<String>,
    pub send_notifications: bool,
    pub captcha_enabled: bool,
    pub ref_program_percents: f64,
    pub ref_reward_per_user: f64,
    pub state: ChequeState,
    pub link: String,
    pub disabled_languages: Vec<String>,
    pub enabled_countries: Vec<String>,
    pub for_premium: bool,
    pub for_new_users_only: bool,
    pub linked_wallet: bool,
    pub tg_resources: Vec<TgResource>,
    pub activations: u64,
    pub ref_rewards: u64,
    pub share_per_user: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TgResource {
    #[serde(deserialize_with = "super::de::i64_from_number")]
    pub telegram_id: i64,
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ChequeWire {
    #[serde(deserialize_with = "super::de::u64_from_number")]
    id: u64,
    currency: String,
    total: f64,
    per_user: f64,
    #[serde(deserialize_with = "super::de::u64_from_number")]
    users: u64,
    password: Option<String>,
    description: Option<String>,
    send_notifications: bool,
    captcha_enabled: bool,
    ref_program_percents: f64,
    ref_reward_per_user: f64,
    state: ChequeState,
    link: String,
    disabled_languages: Vec<String>,
    enabled_countries: Vec<String>,
    for_premium: bool,
    for_new_users_only: bool,
    linked_wallet: bool,
    tg_resources: Vec<TgResource>,
    /// Legacy spelling of `tgResources`; merged into it.
    resourses: Vec<TgResource>,
    #[serde(deserialize_with = "super::de::u64_from_number")]
    activations: u64,
    #[serde(deserialize_with = "super::de::u64_from_number")]
    ref_rewards: u64,
}

impl From<ChequeWire> for Cheque {
    fn from(mut wire: ChequeWire) -> Self {
        wire.tg_resources.append(&mut wire.resourses);
        let share_per_user = if wire.users == 0 {
            0.0
        } else {
            wire.total / wire.users as f64
        };

        Self {
            id: wire.id,
            currency: wire.currency,
            total: wire.total,
            per_user: wire.per_user,
            users: wire.users,
            password: wire.password,
            description: wire.description,
            send_notifications: wire.send_notifications,
            captcha_enabled: wire.captcha_enabled,
            ref_program_percents: wire.ref_program_percents,
            ref_reward_per_user: wire.ref_reward_per_user,
            state: wire.state,
            link: wire.link,
            disabled_languages: wire.disabled_languages,
            enabled_countries: wire.enabled_countries,
            for_premium: wire.for_premium,
            for_new_users_only: wire.for_new_users_only,
            linked_wallet: wire.linked_wallet,
            tg_resources: wire.tg_resources,
            activations: wire.activations,
            ref_rewards: wire.ref_rewards,
            share_per_user,
        }
    }
}

impl Cheque {
    /// Activations still available.
    pub fn remaining_activations(&self) -> u64 {
        self.users.saturating_sub(self.activations)
    }
}

impl FromApi for Cheque {}
