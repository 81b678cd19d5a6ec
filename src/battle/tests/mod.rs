pub mod common;




#[cfg(test)]
mod test_selection;

#[cfg(test)]
mod test_playback_effects;
