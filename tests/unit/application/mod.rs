mod test_controller;
