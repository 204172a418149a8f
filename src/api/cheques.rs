use log::info;

use super::endpoints::{
    CREATE_MULTI_CHEQUE, DELETE_MULTI_CHEQUE, EDIT_MULTI_CHEQUE, GET_MULTI_CHEQUE, GET_MULTI_CHEQUES,
};
use super::{RocketClient, page_query};
use crate::http::ClientError;
use crate::models::{Cheque, MultiChequeUpdate, NewMultiCheque, Page};

impl RocketClient {
    pub async fn create_multi_cheque(&self, cheque: &NewMultiCheque) -> Result<Cheque, ClientError> {
        info!(
            currency = cheque.currency.as_str(),
            per_user = cheque.cheque_per_user,
            users = cheque.users_number;
            "Creating multi-cheque"
        );
        self.send(&CREATE_MULTI_CHEQUE, CREATE_MULTI_CHEQUE.path, cheque)
            .await?
            .into_data()
    }

    pub async fn get_multi_cheques(&self, limit: u32, offset: u32) -> Result<Page<Cheque>, ClientError> {
        self.get_with_query(&GET_MULTI_CHEQUES, page_query(limit, offset))
            .await?
            .into_data()
    }

    pub async fn get_multi_cheque(&self, cheque_id: u64) -> Result<Cheque, ClientError> {
        let path = GET_MULTI_CHEQUE.resolve(cheque_id);
        self.call(&GET_MULTI_CHEQUE, &path, GET_MULTI_CHEQUE.options())
            .await?
            .into_data()
    }

    /// Applies the fields set in `update`; unset fields keep their value.
    pub async fn edit_multi_cheque(&self, cheque_id: u64, update: &MultiChequeUpdate) -> Result<Cheque, ClientError> {
        let path = EDIT_MULTI_CHEQUE.resolve(cheque_id);
        self.send(&EDIT_MULTI_CHEQUE, &path, update).await?.into_data()
    }

    /// Deletes a multi-cheque. Any failure is an error, so `Ok` is always
    /// `true`.
    pub async fn delete_multi_cheque(&self, cheque_id: u64) -> Result<bool, ClientError> {
        let path = DELETE_MULTI_CHEQUE.resolve(cheque_id);
        let envelope = self
            .call(&DELETE_MULTI_CHEQUE, &path, DELETE_MULTI_CHEQUE.options())
            .await?;
        info!(cheque_id = cheque_id; "Multi-cheque deleted");
        Ok(envelope.is_success())
    }
}
