mod http_method_test;
