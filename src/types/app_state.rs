use crate::utils::idfm_client::IdfmClient;

#[derive(Clone)]
pub struct AppState {
    pub idfm_client: IdfmClient,
}
