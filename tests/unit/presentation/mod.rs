mod test_views;
