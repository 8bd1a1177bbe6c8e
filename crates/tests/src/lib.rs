#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod admin_stats_tests;

#[cfg(test)]
mod upload_policy_tests;

#[cfg(test)]
mod transport_tests;

#[cfg(test)]
mod health_tests;
