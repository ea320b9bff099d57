use chaincode_rs::{
    core::{ContractError, ContractResult},
    events::DomainEvent,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    operation::{EntryPoint, Operation},
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::{get_contract_version, set_contract_version};

use crate::handler::{self, INIT_KEY};

const CONTRACT_NAME: &str = "crates.io:simple-chaincode";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    deps.api.debug("init is running");
    handler::initialize(deps.storage, &msg.args)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("function", Operation::Init.name())
        .add_attribute("initialized", "true")
        .add_event(DomainEvent::ChaincodeInitialized {
            contract_address: env.contract.address,
            key: INIT_KEY.to_string(),
        }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult {
    let stored = get_contract_version(deps.storage)?;

    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            stored: stored.contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default()
        .add_attribute("migrated", "true")
        .add_attribute("from_version", stored.version))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMut, env: Env, _info: MessageInfo, msg: ExecuteMsg) -> ContractResult {
    match msg {
        ExecuteMsg::Invoke { function, args } => {
            deps.api.debug(&format!("invoke is running {}", function));

            let operation = Operation::resolve(EntryPoint::Invoke, &function).map_err(|e| {
                deps.api.debug(&format!("invoke did not find func: {}", function));
                e
            })?;

            let data = handler::invoke(deps.storage, operation, &args)?;

            let event = match operation {
                Operation::Init => DomainEvent::ChaincodeInitialized {
                    contract_address: env.contract.address,
                    key: INIT_KEY.to_string(),
                },
                Operation::Write => DomainEvent::StateWritten {
                    contract_address: env.contract.address,
                    key: args[0].clone(),
                },
                Operation::Read => {
                    return Err(ContractError::UnknownFunction {
                        entry_point: EntryPoint::Invoke,
                        function: function.clone(),
                    })
                }
            };

            let response = Response::default()
                .add_attribute("action", "invoke")
                .add_attribute("function", operation.name())
                .add_event(event);

            Ok(match data {
                Some(data) => response.set_data(data),
                None => response,
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Query { function, args } => {
            deps.api.debug(&format!("query is running {}", function));

            let operation = Operation::resolve(EntryPoint::Query, &function).map_err(|e| {
                deps.api.debug(&format!("query did not find func: {}", function));
                e
            })?;

            let data = handler::query(deps.storage, operation, &args)?;

            Ok(to_json_binary(&data.unwrap_or_default())?)
        }
    }
}

#[cfg(test)]
fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
fn read_query(deps: Deps, name: &str) -> Result<Binary, ContractError> {
    query(
        deps,
        cosmwasm_std::testing::mock_env(),
        QueryMsg::Query {
            function: "read".to_string(),
            args: args(&[name]),
        },
    )
    .map(|response| cosmwasm_std::from_json::<Binary>(response).unwrap())
}
