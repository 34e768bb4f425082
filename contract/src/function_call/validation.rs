use crate::*;

/// Check every set of methods a drop is created with. Nothing about the drop is stored if this fails.
pub fn validate_methods_by_use(
    methods_by_use: &[Vec<MethodData>],
    uses_per_key: UseNumber,
    deposit_per_use: u128,
    config: &ContractConfig,
) -> Result<(), ClaimError> {
    if uses_per_key == 0 {
        return Err(invalid_config!("uses_per_key must be greater than 0"));
    }

    let num_sets = methods_by_use.len();
    if num_sets != 1 && num_sets != uses_per_key as usize {
        return Err(invalid_config!(
            "expected 1 or {} sets of methods but got {}",
            uses_per_key,
            num_sets
        ));
    }

    for (idx, methods) in methods_by_use.iter().enumerate() {
        validate_methods_for_use(methods, deposit_per_use, config)
            .map_err(|e| match e {
                ClaimError::InvalidConfig(msg) => invalid_config!("use {}: {}", idx + 1, msg),
                other => other,
            })?;
    }

    Ok(())
}

/// Check the methods called for a single use
pub fn validate_methods_for_use(
    methods: &[MethodData],
    deposit_per_use: u128,
    config: &ContractConfig,
) -> Result<(), ClaimError> {
    if methods.is_empty() {
        return Err(invalid_config!("no methods to call"));
    }
    if methods.len() > config.max_methods_per_use as usize {
        return Err(invalid_config!(
            "{} methods exceeds the limit of {}",
            methods.len(),
            config.max_methods_per_use
        ));
    }

    let mut total_deposit: u128 = 0;
    let mut total_gas = BASE_GAS_FOR_CLAIM;
    for method in methods {
        validate_method(method, config)?;

        total_deposit = total_deposit
            .checked_add(method.attached_deposit.0)
            .ok_or_else(|| invalid_config!("attached deposits overflow"))?;
        total_gas = total_gas
            .checked_add(method.required_gas())
            .ok_or_else(|| invalid_config!("attached gas overflows"))?;
    }

    if total_deposit > deposit_per_use {
        return Err(invalid_config!(
            "attached deposits ({}) exceed the deposit per use ({})",
            total_deposit,
            deposit_per_use
        ));
    }
    if total_gas > MAX_GAS_ATTACHABLE {
        return Err(invalid_config!(
            "claiming requires {} gas which is more than the {} that can be attached",
            total_gas.as_gas(),
            MAX_GAS_ATTACHABLE.as_gas()
        ));
    }

    Ok(())
}

/// Check a single method and the fields it wants injected
pub fn validate_method(method: &MethodData, config: &ContractConfig) -> Result<(), ClaimError> {
    if method.method_name.is_empty() {
        return Err(invalid_config!("method name cannot be empty"));
    }
    if method.args.len() > config.max_args_len as usize {
        return Err(invalid_config!(
            "args of {} are {} bytes long, the limit is {}",
            method.method_name,
            method.args.len(),
            config.max_args_len
        ));
    }

    let Some(keypom_args) = method.keypom_args.as_ref() else {
        return Ok(());
    };

    let declared = keypom_args.declared_paths();
    for (field, path) in declared.iter() {
        let segments = split_field_path(path)
            .map_err(|_| invalid_config!("{} of {} is not a valid path", field.field_name(), method.method_name))?;
        if segments[0] == KEYPOM_ARGS_FIELD {
            return Err(invalid_config!(
                "{} cannot write into the reserved {} field",
                field.field_name(),
                KEYPOM_ARGS_FIELD
            ));
        }
    }

    for (i, (field_a, path_a)) in declared.iter().enumerate() {
        for (field_b, path_b) in declared.iter().skip(i + 1) {
            if paths_overlap(path_a, path_b) {
                return Err(invalid_config!(
                    "{} ({}) and {} ({}) overlap",
                    field_a.field_name(),
                    path_a,
                    field_b.field_name(),
                    path_b
                ));
            }
        }
    }

    Ok(())
}

/// Two paths overlap if they are equal or one of them is nested inside the other
fn paths_overlap(a: &str, b: &str) -> bool {
    let is_nested = |outer: &str, inner: &str| {
        inner
            .strip_prefix(outer)
            .map(|rest| rest.starts_with(FIELD_PATH_SEPARATOR))
            .unwrap_or(false)
    };
    a == b || is_nested(a, b) || is_nested(b, a)
}
