use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// Deploys the chaincode. The arguments are handed to the `init` operation.
#[cw_serde]
pub struct InstantiateMsg {
    pub args: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Invoke {
        function: String,
        args: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Binary)]
    Query {
        function: String,
        args: Vec<String>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
