use crate::*;

/// The authoritative values that get written into the args when a key is claimed
#[derive(Debug, Clone)]
pub struct InjectedIdentities<'a> {
    /// Account that claimed the key
    pub account_id: &'a AccountId,
    /// Account that created the drop
    pub funder_id: &'a AccountId,
    pub drop_id: &'a DropId,
    pub key_id: KeyId,
}

/// A fully built function call waiting to be dispatched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct OutboundCall {
    pub receiver_id: AccountId,
    pub method_name: String,
    /// Final args after the identities were injected
    pub args: String,
    pub attached_deposit: NearToken,
    pub attached_gas: Gas,
}

impl OutboundCall {
    /// Turn the call into a promise. The call is allotted its attached gas plus an even share of whatever is left.
    pub fn into_promise(self) -> Promise {
        Promise::new(self.receiver_id).function_call_weight(
            self.method_name,
            self.args.into_bytes(),
            self.attached_deposit,
            self.attached_gas,
            GasWeight(1),
        )
    }
}

/// Build the sanitized args for a method. The funder's args are parsed and copied, the
/// `keypom_args` descriptor is written at the root and every declared field is overwritten with
/// the value it stands for.
pub fn build_payload(method: &MethodData, ids: &InjectedIdentities) -> Result<String, ClaimError> {
    let mut args: Value = if method.args.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str(&method.args)
            .map_err(|e| malformed_args!("cannot parse args of {} as JSON: {}", method.method_name, e))?
    };

    let Value::Object(root) = &mut args else {
        return Err(malformed_args!("args of {} must be a JSON object", method.method_name));
    };

    let keypom_args = method.keypom_args.clone().unwrap_or_default();
    // Any `keypom_args` the funder wrote into the args is replaced
    root.insert(KEYPOM_ARGS_FIELD.to_string(), json!(keypom_args));

    for (field, path) in keypom_args.declared_paths() {
        let value = match field {
            InjectedField::AccountId => json!(ids.account_id),
            InjectedField::DropId => json!(ids.drop_id),
            InjectedField::KeyId => json!(ids.key_id.to_string()),
            InjectedField::FunderId => json!(ids.funder_id),
        };
        insert_at_path(&mut args, path, value)?;
    }

    Ok(args.to_string())
}

/// Build the call that will be dispatched for a method
pub fn build_outbound_call(method: &MethodData, ids: &InjectedIdentities) -> Result<OutboundCall, ClaimError> {
    Ok(OutboundCall {
        receiver_id: method.receiver_id.clone(),
        method_name: method.method_name.clone(),
        args: build_payload(method, ids)?,
        attached_deposit: NearToken::from_yoctonear(method.attached_deposit.0),
        attached_gas: method.attached_gas,
    })
}
