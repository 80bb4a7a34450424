#[cfg(test)]
mod common;

#[cfg(test)]
mod test_resolve_turn;

#[cfg(test)]
mod test_run;




#[cfg(test)]
mod test_end_of_turn;
