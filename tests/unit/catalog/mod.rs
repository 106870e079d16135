mod symbols;
